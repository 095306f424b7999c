pub mod error;
pub mod math;
pub mod operations;
pub mod session;
pub mod settings;
pub mod topology;

pub use error::{Result, UvError};
