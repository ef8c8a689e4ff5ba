//! Error types and result aliases for itinerary-prettifier.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! The formatting pipeline itself never fails; errors only arise in the I/O
//! layer (reading input, loading the airport lookup, writing output).

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
