//! Four-function calculator widget.
//!
//! This module provides:
//! - The input state machine (digit entry, pending-operator algebra,
//!   chained operations, error recovery)
//! - Result formatting that keeps floating-point artifacts off the display

mod engine;
mod format;

pub use engine::{Calculator, DIVIDE_BY_ZERO, Operator};
pub use format::format_result;
