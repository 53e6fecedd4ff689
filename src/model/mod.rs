pub mod config;
pub mod document;

pub use config::*;
pub use document::*;
