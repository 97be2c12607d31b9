//! Version domain logic - grammar, model and ordering, free of host concerns

pub mod comparison;
pub mod grammar;
pub mod precision;
pub mod version;

pub use comparison::Comparison;
pub use grammar::{recognize, RawComponents};
pub use precision::Precision;
pub use version::{ComponentSet, Version};
