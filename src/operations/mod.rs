pub mod layout;
pub mod query;
pub mod texel;
pub mod transform;
