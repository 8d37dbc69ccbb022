//! Core invoice types, totals, amount in words, and the editing session.
//!
//! This module holds everything needed to turn a filled-in GST invoice
//! form into a frozen, print-ready snapshot. No I/O happens here.

mod draft;
mod error;
mod fiscal_year;
#[cfg(feature = "json")]
mod json;
mod profile;
mod session;
mod snapshot;
mod totals;
mod types;
pub mod words;

pub use draft::*;
pub use error::*;
pub use fiscal_year::*;
#[cfg(feature = "json")]
pub use json::*;
pub use profile::*;
pub use session::*;
pub use snapshot::*;
pub use totals::*;
pub use types::*;
pub use words::{amount_to_words, amount_to_words_f64};
