pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{Cli, Config, FilterSelect};
pub use domain::*;
pub use infrastructure::*;
