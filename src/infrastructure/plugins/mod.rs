pub mod log_hook;

pub use log_hook::*;
