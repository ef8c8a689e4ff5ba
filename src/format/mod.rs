//! Itinerary text formatting.
//!
//! This module contains the core rewriting logic organized into submodules:
//! - [`whitespace`]: Normalizes control characters, collapses blank-line
//!   runs, and trims excessive spacing
//! - [`airports`]: Replaces airport-code tokens with airport or city names
//! - [`dates`]: Replaces `D(...)`, `T12(...)` and `T24(...)` tokens with
//!   formatted dates and times
//!
//! Every function here is a pure text-to-text transform; ordering between
//! them is owned by [`crate::process::pipeline`].

pub mod airports;
pub mod dates;
pub mod whitespace;

pub use airports::replace_airport_codes;
pub use dates::replace_times_then_dates;
pub use whitespace::{collapse_blank_lines, convert_control_chars, trim_excess_whitespace};
