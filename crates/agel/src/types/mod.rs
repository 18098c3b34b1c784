//! Core types for AGEL evaluation.

mod constants;
mod value;

pub use constants::{Constants, ConstantsTable};
pub use value::Value;
