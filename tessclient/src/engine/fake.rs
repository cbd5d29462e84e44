//! In-memory backend that records every call, used by the client tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use super::{Backend, Engine, ImageSource, InitParams};
use crate::cache::DICTIONARY_CACHE;
use crate::error::{OcrError, Result};
use crate::models::{BoundingBox, PageIteratorLevel, PageSegMode};

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub inits: usize,
    pub releases: usize,
    /// Whether the dictionary cache guard was held during each release.
    pub releases_under_cache_guard: Vec<bool>,
    pub cache_purges: usize,
    pub live: usize,
    pub last_languages: Vec<String>,
    pub last_prefix: Option<PathBuf>,
    pub last_config: Option<PathBuf>,
    /// Variables on the live instance; cleared on release.
    pub engine_variables: BTreeMap<String, String>,
    pub variable_calls: Vec<(String, String)>,
    pub page_seg_mode: Option<PageSegMode>,
    pub source_resolution: Option<u32>,
    pub images: Vec<ImageSource>,
    pub recognitions: usize,
    pub fail_init: bool,
    pub fail_release: bool,
    pub reject_variables: bool,
    pub text: String,
    pub hocr: String,
    pub tsv: String,
    pub boxes: Vec<BoundingBox>,
    pub box_levels: Vec<PageIteratorLevel>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeBackend {
    pub state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn with_text(text: &str) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().text = text.to_string();
        backend
    }
}

#[derive(Debug)]
pub(crate) struct FakeEngine {
    state: Rc<RefCell<FakeState>>,
}

impl Backend for FakeBackend {
    type Engine = FakeEngine;

    fn initialize(&self, params: &InitParams<'_>) -> Result<FakeEngine> {
        let mut state = self.state.borrow_mut();
        if state.fail_init {
            return Err(OcrError::Initialization(format!(
                "no traineddata for {}",
                params.language_spec()
            )));
        }
        state.inits += 1;
        state.live += 1;
        state.last_languages = params.languages.to_vec();
        state.last_prefix = params.tessdata_prefix.map(PathBuf::from);
        state.last_config = params.config_file.map(PathBuf::from);
        Ok(FakeEngine {
            state: Rc::clone(&self.state),
        })
    }

    fn version(&self) -> String {
        "5.3.0-fake".to_string()
    }

    fn default_datapath(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/fake/tessdata"))
    }

    fn clear_persistent_cache(&self) -> Result<()> {
        self.state.borrow_mut().cache_purges += 1;
        Ok(())
    }
}

impl Engine for FakeEngine {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_variables {
            return Err(OcrError::Engine(format!("rejected {name}")));
        }
        state
            .variable_calls
            .push((name.to_string(), value.to_string()));
        state
            .engine_variables
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_page_seg_mode(&mut self, mode: PageSegMode) -> Result<()> {
        self.state.borrow_mut().page_seg_mode = Some(mode);
        Ok(())
    }

    fn set_image(&mut self, image: &ImageSource) -> Result<()> {
        self.state.borrow_mut().images.push(image.clone());
        Ok(())
    }

    fn set_source_resolution(&mut self, ppi: u32) -> Result<()> {
        self.state.borrow_mut().source_resolution = Some(ppi);
        Ok(())
    }

    fn recognize(&mut self) -> Result<()> {
        self.state.borrow_mut().recognitions += 1;
        Ok(())
    }

    /// Applies the whitelist the way the engine would: other characters never come out.
    fn utf8_text(&mut self) -> Result<String> {
        let state = self.state.borrow();
        let text = match state.engine_variables.get("tessedit_char_whitelist") {
            Some(whitelist) => state
                .text
                .chars()
                .filter(|c| c.is_whitespace() || whitelist.contains(*c))
                .collect(),
            None => state.text.clone(),
        };
        Ok(text)
    }

    fn hocr_text(&mut self, _page: i32) -> Result<String> {
        Ok(self.state.borrow().hocr.clone())
    }

    fn tsv_text(&mut self, _page: i32) -> Result<String> {
        Ok(self.state.borrow().tsv.clone())
    }

    fn bounding_boxes(&mut self, level: PageIteratorLevel) -> Result<Vec<BoundingBox>> {
        let mut state = self.state.borrow_mut();
        state.box_levels.push(level);
        Ok(state.boxes.clone())
    }

    fn release(self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_release {
            return Err(OcrError::Release("handle busy".to_string()));
        }
        state.releases += 1;
        state
            .releases_under_cache_guard
            .push(DICTIONARY_CACHE.is_entered());
        state.live -= 1;
        state.engine_variables.clear();
        Ok(())
    }
}
