//! Runtime configuration

use std::path::PathBuf;

use crate::error::{ReceiptError, ReceiptResult};

/// Runtime configuration for the receipt binary
#[derive(Debug, Clone)]
pub struct Config {
    /// Data directory for persisted images
    pub data_dir: PathBuf,
    /// Paper width in characters (48 for 80mm paper, 32 for 58mm)
    pub paper_width: usize,
    /// Receipt JSON to render; defaults are used when unset
    pub receipt_path: Option<PathBuf>,
    /// Logo image to import into the store before rendering
    pub logo_path: Option<PathBuf>,
    /// Signature image to import into the store before rendering
    pub signature_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; a variable that is set
    /// but unusable is a configuration error.
    pub fn from_env() -> ReceiptResult<Self> {
        Ok(Self {
            data_dir: std::env::var("RASID_DATA_DIR")
                .unwrap_or_else(|_| "./rasid-data".into())
                .into(),
            paper_width: parse_paper_width(std::env::var("RASID_PAPER_WIDTH").ok().as_deref())?,
            receipt_path: std::env::var("RASID_RECEIPT").ok().map(PathBuf::from),
            logo_path: std::env::var("RASID_LOGO").ok().map(PathBuf::from),
            signature_path: std::env::var("RASID_SIGNATURE").ok().map(PathBuf::from),
        })
    }
}

/// Parse an explicitly set paper width; unset falls back to 48.
fn parse_paper_width(raw: Option<&str>) -> ReceiptResult<usize> {
    match raw {
        None => Ok(48),
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| ReceiptError::InvalidConfig(format!("bad paper width: {raw:?}"))),
    }
}
