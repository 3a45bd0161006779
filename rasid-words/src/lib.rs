//! # rasid-words
//!
//! Indian currency display helpers - pure formatting capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW amounts are displayed:
//! - Indian digit grouping (1,23,456 style)
//! - Amount-to-words conversion (Crore/Lakh/Thousand/Hundred)
//!
//! Business logic (WHAT to display) should stay in application code:
//! - Receipt rendering → rasid-receipt
//!
//! ## Example
//!
//! ```
//! use rasid_words::{format_digits, to_indian_words};
//!
//! assert_eq!(format_digits(Some(1234567.0)), "12,34,567");
//! assert_eq!(
//!     to_indian_words(Some(210000.0)),
//!     "Two Lakh Ten Thousand rupees"
//! );
//! ```
//!
//! Both functions are total over `Option<f64>`: missing or non-numeric
//! input degrades to an empty string (formatter) or `"Zero rupees"`
//! (words converter). Neither ever panics.

mod grouping;
mod words;

// Re-exports
pub use grouping::{format_digits, format_digits_i64};
pub use words::to_indian_words;
