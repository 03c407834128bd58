//! Misura Tool - Converter Widget Logic
//!
//! The algorithmic half of the converter widget, built on misura-units:
//! - Amount validation (raw text to a non-negative finite number)
//! - Selection state that keeps the two unit selectors on the same
//!   category and supports swapping
//! - Display formatting for converted values and exchange ratios
//!
//! Rendering itself is a consumer of this crate.

mod input;
mod selection;
mod format;

pub use input::{parse_amount, AmountError};
pub use selection::{ConverterTool, Reading, ReadingError};
pub use format::{approx_line, format_ratio, format_value};
