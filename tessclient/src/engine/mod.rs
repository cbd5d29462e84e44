//! Native engine boundary
//!
//! Everything the client needs from the OCR engine goes through two traits:
//!
//! - `Backend` creates and initializes engine instances and answers the
//!   process-wide queries (version, default data path, cache purge).
//! - `Engine` is one initialized instance. It is owned by exactly one
//!   `Client` and released exactly once, either through `Engine::release`
//!   or when dropped.
//!
//! `Tesseract` is the production backend, calling the engine's C API through
//! `leptess::capi`. Verbose per-word output is parsed by `parse_tsv_word_boxes`.

mod structure;
mod tesseract;
mod tsv;

#[cfg(test)]
pub(crate) mod fake;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{BoundingBox, PageIteratorLevel, PageSegMode};

pub use tesseract::{Tesseract, TesseractEngine};
pub use tsv::parse_tsv_word_boxes;

pub(crate) use structure::StructureCounter;

/// Image input handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image file the engine decodes itself.
    Path(PathBuf),
    /// Encoded image bytes (PNG, JPEG, TIFF, ...).
    Bytes(Vec<u8>),
}

/// Everything that requires a fresh engine instance when it changes.
#[derive(Debug, Clone, Copy)]
pub struct InitParams<'a> {
    pub languages: &'a [String],
    pub tessdata_prefix: Option<&'a Path>,
    pub config_file: Option<&'a Path>,
}

impl InitParams<'_> {
    /// Language list in the engine's `eng+deu` form.
    pub fn language_spec(&self) -> String {
        self.languages.join("+")
    }
}

pub trait Backend {
    type Engine: Engine;

    /// Create a native instance and load languages, data path and config file.
    fn initialize(&self, params: &InitParams<'_>) -> Result<Self::Engine>;

    fn version(&self) -> String;

    /// Data directory the engine uses when no prefix is configured.
    fn default_datapath(&self) -> Result<PathBuf>;

    /// Drop dictionary data cached across instances.
    fn clear_persistent_cache(&self) -> Result<()>;
}

pub trait Engine {
    /// Set a named engine variable. Only valid on an initialized instance.
    fn set_variable(&mut self, name: &str, value: &str) -> Result<()>;

    fn set_page_seg_mode(&mut self, mode: PageSegMode) -> Result<()>;

    fn set_image(&mut self, image: &ImageSource) -> Result<()>;

    /// Resolution hint in pixels per inch for the current image.
    fn set_source_resolution(&mut self, ppi: u32) -> Result<()>;

    fn recognize(&mut self) -> Result<()>;

    fn utf8_text(&mut self) -> Result<String>;

    fn hocr_text(&mut self, page: i32) -> Result<String>;

    fn tsv_text(&mut self, page: i32) -> Result<String>;

    fn bounding_boxes(&mut self, level: PageIteratorLevel) -> Result<Vec<BoundingBox>>;

    /// Free the native instance.
    fn release(self) -> Result<()>
    where
        Self: Sized;
}
