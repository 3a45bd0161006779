//! Image persistence for receipt assets
//!
//! The logo and signature uploaded for a receipt survive across runs:
//! image bytes are written under `{data_dir}/images/{sha256}.{ext}`
//! (content hash as file name, natural de-dup) and a small JSON index
//! maps each slot to its current file.
//!
//! Input is either raw bytes or a `data:` URL as produced by browser
//! file readers; the base64 payload is decoded before storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Slot index error: {0}")]
    Index(#[from] serde_json::Error),

    #[error("No image stored for slot: {0}")]
    NotFound(ImageSlot),
}

/// Keyed image slots on the receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    Logo,
    Signature,
}

impl ImageSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSlot::Logo => "logo",
            ImageSlot::Signature => "signature",
        }
    }
}

impl std::fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File-backed store for receipt images
pub struct ImageStore {
    images_dir: PathBuf,
    index_path: PathBuf,
}

impl ImageStore {
    /// Open (or create) the store under the given data directory
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let images_dir = data_dir.join("images");
        fs::create_dir_all(&images_dir)?;
        Ok(Self {
            index_path: images_dir.join("slots.json"),
            images_dir,
        })
    }

    /// Store raw image bytes for a slot, returning the stored path
    pub fn save_slot(
        &self,
        slot: ImageSlot,
        bytes: &[u8],
        ext: &str,
    ) -> Result<PathBuf, StoreError> {
        let hash = hex::encode(Sha256::digest(bytes));
        let file_name = format!("{hash}.{ext}");
        let path = self.images_dir.join(&file_name);
        if !path.exists() {
            fs::write(&path, bytes)?;
        }

        let mut index = self.read_index();
        index.insert(slot.as_str().to_string(), file_name);
        self.write_index(&index)?;

        info!(slot = %slot, size = bytes.len(), "stored receipt image");
        Ok(path)
    }

    /// Store a `data:` URL payload for a slot
    ///
    /// Accepts the `data:{mime};base64,{payload}` shape produced by
    /// browser file readers.
    pub fn save_data_url(&self, slot: ImageSlot, url: &str) -> Result<PathBuf, StoreError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| StoreError::InvalidDataUrl("missing data: scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| StoreError::InvalidDataUrl("missing payload separator".to_string()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| StoreError::InvalidDataUrl("payload is not base64".to_string()))?;

        let bytes = BASE64.decode(payload)?;
        self.save_slot(slot, &bytes, ext_for_mime(mime))
    }

    /// Import an image file into a slot, keeping its extension
    pub fn import_file(&self, slot: ImageSlot, path: &Path) -> Result<PathBuf, StoreError> {
        let bytes = fs::read(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin")
            .to_ascii_lowercase();
        self.save_slot(slot, &bytes, &ext)
    }

    /// Load the stored bytes for a slot
    pub fn load_slot(&self, slot: ImageSlot) -> Result<Vec<u8>, StoreError> {
        Ok(fs::read(self.slot_path(slot)?)?)
    }

    /// Path of the stored image for a slot, if any
    pub fn slot_path(&self, slot: ImageSlot) -> Result<PathBuf, StoreError> {
        let index = self.read_index();
        let file_name = index
            .get(slot.as_str())
            .ok_or(StoreError::NotFound(slot))?;
        let path = self.images_dir.join(file_name);
        if !path.exists() {
            warn!(slot = %slot, file = %file_name, "slot index points at missing file");
            return Err(StoreError::NotFound(slot));
        }
        Ok(path)
    }

    fn read_index(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.index_path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("slot index unreadable, starting fresh: {e}");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn write_index(&self, index: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(index)?;
        fs::write(&self.index_path, raw)?;
        Ok(())
    }
}

fn ext_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn test_save_and_load_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();

        let path = store
            .save_slot(ImageSlot::Logo, b"fake image bytes", "png")
            .unwrap();
        assert!(path.exists());
        assert_eq!(
            store.load_slot(ImageSlot::Logo).unwrap(),
            b"fake image bytes"
        );
    }

    #[test]
    fn test_slots_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();

        store.save_slot(ImageSlot::Logo, b"logo", "png").unwrap();
        store
            .save_slot(ImageSlot::Signature, b"sign", "jpg")
            .unwrap();

        assert_eq!(store.load_slot(ImageSlot::Logo).unwrap(), b"logo");
        assert_eq!(store.load_slot(ImageSlot::Signature).unwrap(), b"sign");
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = ImageStore::open(dir.path()).unwrap();
            store.save_slot(ImageSlot::Signature, b"sign", "png").unwrap();
        }
        let store = ImageStore::open(dir.path()).unwrap();
        assert_eq!(store.load_slot(ImageSlot::Signature).unwrap(), b"sign");
    }

    #[test]
    fn test_data_url_decodes_and_names_by_mime() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();

        let path = store.save_data_url(ImageSlot::Logo, PNG_DATA_URL).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        // Decoded PNG magic bytes
        let bytes = store.load_slot(ImageSlot::Logo).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_rejects_malformed_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.save_data_url(ImageSlot::Logo, "http://not-a-data-url"),
            Err(StoreError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            store.save_data_url(ImageSlot::Logo, "data:image/png;base64"),
            Err(StoreError::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn test_missing_slot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.slot_path(ImageSlot::Logo),
            Err(StoreError::NotFound(ImageSlot::Logo))
        ));
    }

    #[test]
    fn test_import_file_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();

        let src = dir.path().join("logo.PNG");
        std::fs::write(&src, b"logo bytes").unwrap();

        let stored = store.import_file(ImageSlot::Logo, &src).unwrap();
        assert_eq!(stored.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(store.load_slot(ImageSlot::Logo).unwrap(), b"logo bytes");
    }

    #[test]
    fn test_same_content_reuses_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();

        let a = store.save_slot(ImageSlot::Logo, b"shared", "png").unwrap();
        let b = store
            .save_slot(ImageSlot::Signature, b"shared", "png")
            .unwrap();
        assert_eq!(a, b);
    }
}
