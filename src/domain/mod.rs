pub mod calendar;
pub mod config;
pub mod date_range;
pub mod error;
pub mod format;
pub mod preset;
pub mod resolver;

pub use config::*;
pub use date_range::*;
pub use error::*;
pub use format::*;
pub use preset::*;
pub use resolver::*;
