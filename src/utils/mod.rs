//! Utility modules for the logo pipeline.

pub mod hash;
pub mod plural;

pub use plural::{plural_count, plural_s};
