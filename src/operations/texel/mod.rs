//! Texel density measurement and correction.
//!
//! A component's texel ratio is `sqrt(world area / uv area)`: texels per unit
//! length at a texture size of 1. Multiplying by the texture resolution gives
//! its texel density.

mod area;
mod density;
mod measure;
mod set_density;

pub use area::UvArea;
pub use density::{average_density, density};
pub use measure::{MeasureTexelDensity, TexelDensity};
pub use set_density::{Granularity, SetTexelDensity, TexelDensityParams};
