//! Whole-shell edits that do not depend on the rest of the group.

mod mirror;
mod orient;
mod rotate;
mod translate;

pub use mirror::MirrorShells;
pub use orient::OrientShells;
pub use rotate::RotateShells;
pub use translate::TranslateShells;
