//! # rasid-receipt
//!
//! Printable payment receipt toolkit for Indian solar installations.
//!
//! Takes customer, amount and image data and produces a formatted,
//! print-ready text receipt: amounts with Indian digit grouping, the
//! total spelled out in words, and persistent logo/signature assets.
//!
//! ## Example
//!
//! ```
//! use rasid_receipt::{ReceiptData, ReceiptRenderer};
//!
//! let receipt = ReceiptData::default();
//! let text = ReceiptRenderer::new(&receipt, 48).render();
//! assert!(text.contains("₹2,10,000"));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod renderer;
pub mod store;
pub mod text;

// Re-exports
pub use config::Config;
pub use error::{ReceiptError, ReceiptResult};
pub use model::ReceiptData;
pub use renderer::ReceiptRenderer;
pub use store::{ImageSlot, ImageStore, StoreError};
pub use text::TextBuilder;
