//! Tesseract OCR client
//!
//! This crate wraps one native Tesseract engine instance per `Client` and
//! manages its lifecycle: arguments are collected through setters, the engine
//! is initialized lazily on the first extraction, and changes that the engine
//! can only pick up at init time trigger a transparent re-initialization.
//!
//! # Architecture
//!
//! - `Client` owns the configuration and the engine lifecycle
//!   (uninitialized, initialized, invalidated).
//! - `engine::Backend` / `engine::Engine` are the seam to the native library.
//!   `engine::Tesseract` implements them on top of `leptess::capi`.
//! - `models` holds the value types: `BoundingBox`, `PageSegMode`,
//!   `PageIteratorLevel` and the typed engine `Variable` names.
//!
//! # Configuration
//!
//! `ClientConfig` (see `config.rs`) reads `OCR_LANGUAGES`, `TESSDATA_PREFIX`,
//! `OCR_CONFIG_FILE`, `OCR_TRIM`, `OCR_PAGE_SEG_MODE`,
//! `OCR_SOURCE_RESOLUTION` and `OCR_DISABLE_OUTPUT`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut client = Client::new();
//! client.set_languages(&["eng", "deu"])?;
//! client.set_image("scan.png")?;
//! let text = client.extract_text()?;
//! let words = client.extract_bounding_boxes(PageIteratorLevel::Word)?;
//! client.close()?;
//! ```

mod cache;
pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
mod tessdata;

use engine::{Backend, Tesseract};

pub use client::Client;
pub use config::ClientConfig;
pub use engine::parse_tsv_word_boxes;
pub use error::{OcrError, Result};
pub use models::{BoundingBox, PageIteratorLevel, PageSegMode, Rect, TessVariable, Variable};
pub use tessdata::available_languages_in;

/// Version string of the linked Tesseract library.
pub fn version() -> String {
    Tesseract.version()
}

/// Languages installed under `TESSDATA_PREFIX`, or the engine's default data
/// directory when the variable is unset.
pub fn available_languages() -> Result<Vec<String>> {
    tessdata::installed_languages(&Tesseract, None)
}

/// Drop the dictionary data Tesseract caches across engine instances.
///
/// The cache is shared by every engine in the process. This call waits until
/// no client operation is running, purges, and lets waiting operations resume
/// afterwards; they will reload language data on their next initialization.
/// Calling it from inside a client operation on the same thread deadlocks.
pub fn clear_persistent_cache() -> Result<()> {
    cache::DICTIONARY_CACHE.purge(&Tesseract)
}
