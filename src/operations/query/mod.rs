mod get_shells;

pub use get_shells::GetShells;
