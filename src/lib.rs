pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod logging;
pub mod ui;

pub use domain::{Comparison, ComponentSet, Precision, Version};
pub use error::{BukkitVersionError, Result};
