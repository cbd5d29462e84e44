use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use tracing::{debug, warn};
use validator::Validate;

use crate::cache::DICTIONARY_CACHE;
use crate::config::ClientConfig;
use crate::engine::{
    parse_tsv_word_boxes, Backend, Engine, ImageSource, InitParams, Tesseract,
};
use crate::error::{OcrError, Result};
use crate::models::{BoundingBox, PageIteratorLevel, PageSegMode, TessVariable, Variable};
use crate::tessdata;

const NULL_DEVICE: &str = if cfg!(windows) { "NUL" } else { "/dev/null" };

/// Engine lifecycle. `Invalidated` still holds the old instance, which is
/// released right before the next one is created.
enum Lifecycle<E> {
    Uninitialized,
    Initialized(E),
    Invalidated(E),
}

impl<E> Lifecycle<E> {
    fn ready_mut(&mut self) -> Option<&mut E> {
        match self {
            Lifecycle::Initialized(engine) => Some(engine),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Initialized(_) => "initialized",
            Lifecycle::Invalidated(_) => "invalidated",
        }
    }
}

/// Argument builder and lifecycle owner for one OCR engine instance.
///
/// Setters only record configuration. The engine is created lazily by the
/// first terminal operation (`extract_text`, `extract_hocr`,
/// `extract_bounding_boxes`, `extract_bounding_boxes_verbose`) or by an
/// explicit `initialize`. Changing languages, the config file or the tessdata
/// prefix invalidates the live instance; variables, whitelist/blacklist,
/// debug output and page segmentation mode are pushed to a live instance
/// directly and otherwise applied at the next initialization.
///
/// Call `close` when done. Dropping the client releases the instance too.
///
/// ```rust,ignore
/// let mut client = Client::new();
/// client.set_image("page.png")?;
/// let text = client.extract_text()?;
/// client.close()?;
/// ```
pub struct Client<B: Backend = Tesseract> {
    backend: B,
    languages: Vec<String>,
    variables: BTreeMap<Variable, String>,
    config_file: Option<PathBuf>,
    tessdata_prefix: Option<PathBuf>,
    page_seg_mode: Option<PageSegMode>,
    source_resolution: Option<u32>,
    trim: bool,
    image: Option<ImageSource>,
    lifecycle: Lifecycle<B::Engine>,
    initializations: u64,
}

impl Client<Tesseract> {
    pub fn new() -> Self {
        Self::with_backend(Tesseract)
    }

    /// Build a client from validated settings. See `ClientConfig` for the
    /// environment variables its `Default` reads.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut client = Self::new();
        client.apply_config(config)?;
        Ok(client)
    }
}

impl Default for Client<Tesseract> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Client<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            languages: vec!["eng".to_string()],
            variables: BTreeMap::new(),
            config_file: None,
            tessdata_prefix: None,
            page_seg_mode: None,
            source_resolution: None,
            trim: true,
            image: None,
            lifecycle: Lifecycle::Uninitialized,
            initializations: 0,
        }
    }

    pub fn apply_config(&mut self, config: &ClientConfig) -> Result<()> {
        config.validate()?;

        self.set_languages(&config.languages)?;
        if let Some(prefix) = &config.tessdata_prefix {
            self.set_tessdata_prefix(prefix)?;
        }
        if let Some(path) = &config.config_file {
            self.set_config_file(path)?;
        }
        if let Some(mode) = config.page_seg_mode {
            self.set_page_seg_mode(mode)?;
        }
        if let Some(ppi) = config.source_resolution {
            self.set_source_resolution(ppi)?;
        }
        for (variable, value) in &config.variables {
            self.set_variable(*variable, value.as_str())?;
        }
        if config.disable_output {
            self.disable_output()?;
        }
        self.trim = config.trim;
        Ok(())
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn variables(&self) -> &BTreeMap<Variable, String> {
        &self.variables
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn tessdata_prefix(&self) -> Option<&Path> {
        self.tessdata_prefix.as_deref()
    }

    pub fn page_seg_mode(&self) -> Option<PageSegMode> {
        self.page_seg_mode
    }

    pub fn trim(&self) -> bool {
        self.trim
    }

    /// Strip leading/trailing whitespace from `extract_text` results.
    pub fn set_trim(&mut self, trim: bool) {
        self.trim = trim;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// True when the next terminal operation has to create a new engine instance.
    pub fn should_init(&self) -> bool {
        !matches!(self.lifecycle, Lifecycle::Initialized(_))
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Initialized(_))
    }

    /// Number of engine instances this client has successfully initialized.
    pub fn initializations(&self) -> u64 {
        self.initializations
    }

    /// Version string of the engine behind this client.
    pub fn version(&self) -> String {
        self.backend.version()
    }

    /// Languages installed under this client's tessdata prefix (or the
    /// engine's default data directory when no prefix is set).
    pub fn available_languages(&self) -> Result<Vec<String>> {
        tessdata::installed_languages(&self.backend, self.tessdata_prefix.as_deref())
    }

    pub fn set_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(OcrError::Validation("image path cannot be empty".to_string()));
        }
        if !path.is_file() {
            return Err(OcrError::Validation(format!(
                "image file not found: {}",
                path.display()
            )));
        }
        self.image = Some(ImageSource::Path(path.to_path_buf()));
        Ok(())
    }

    /// Use encoded image bytes (PNG, JPEG, TIFF, ...) as the next input.
    pub fn set_image_from_bytes(&mut self, data: impl Into<Vec<u8>>) -> Result<()> {
        let data = data.into();
        if data.is_empty() {
            return Err(OcrError::Validation("image data cannot be empty".to_string()));
        }
        self.image = Some(ImageSource::Bytes(data));
        Ok(())
    }

    /// Use an already decoded image as the next input. It is handed to the
    /// engine as PNG.
    pub fn set_image_from_dynamic(&mut self, image: &DynamicImage) -> Result<()> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        self.set_image_from_bytes(png)
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        self.set_languages(&[language])
    }

    /// Replace the language list. An empty list, or an identifier that is
    /// empty or contains whitespace or `+`, is rejected and the previous list
    /// kept.
    pub fn set_languages<S: AsRef<str>>(&mut self, languages: &[S]) -> Result<()> {
        let languages = languages
            .iter()
            .map(|lang| lang.as_ref().to_string())
            .collect::<Vec<_>>();
        validate_languages(&languages)?;
        self.languages = languages;
        self.invalidate();
        Ok(())
    }

    pub fn set_config_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(OcrError::Validation("config file path cannot be empty".to_string()));
        }
        self.config_file = Some(path.to_path_buf());
        self.invalidate();
        Ok(())
    }

    /// Directory holding `*.traineddata`. Defaults to `TESSDATA_PREFIX` or the
    /// engine's built-in location.
    pub fn set_tessdata_prefix(&mut self, prefix: impl AsRef<Path>) -> Result<()> {
        let prefix = prefix.as_ref();
        if prefix.as_os_str().is_empty() {
            return Err(OcrError::Validation("tessdata prefix cannot be empty".to_string()));
        }
        self.tessdata_prefix = Some(prefix.to_path_buf());
        self.invalidate();
        Ok(())
    }

    pub fn set_page_seg_mode(&mut self, mode: PageSegMode) -> Result<()> {
        if let Some(engine) = self.lifecycle.ready_mut() {
            engine.set_page_seg_mode(mode)?;
        }
        self.page_seg_mode = Some(mode);
        Ok(())
    }

    /// Resolution hint (pixels per inch) passed along with every image.
    pub fn set_source_resolution(&mut self, ppi: u32) -> Result<()> {
        if ppi == 0 {
            return Err(OcrError::Validation(
                "source resolution must be positive".to_string(),
            ));
        }
        self.source_resolution = Some(ppi);
        Ok(())
    }

    /// Set an engine variable. A live instance receives it immediately;
    /// otherwise it is applied right after the next initialization. On error
    /// the previous value stays in place.
    pub fn set_variable(
        &mut self,
        variable: impl Into<Variable>,
        value: impl Into<String>,
    ) -> Result<()> {
        let variable = variable.into();
        let value = value.into();
        if let Some(engine) = self.lifecycle.ready_mut() {
            engine.set_variable(variable.name(), &value)?;
        }
        self.variables.insert(variable, value);
        Ok(())
    }

    /// Same as `set_variable`, with the engine's parameter name.
    pub fn set_variable_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let variable = name.parse::<Variable>().map_err(OcrError::Validation)?;
        self.set_variable(variable, value)
    }

    pub fn set_whitelist(&mut self, whitelist: &str) -> Result<()> {
        self.set_variable(TessVariable::TesseditCharWhitelist, whitelist)
    }

    pub fn set_blacklist(&mut self, blacklist: &str) -> Result<()> {
        self.set_variable(TessVariable::TesseditCharBlacklist, blacklist)
    }

    /// Send the engine's debug output to the null device.
    pub fn disable_output(&mut self) -> Result<()> {
        self.set_variable(TessVariable::DebugFile, NULL_DEVICE)
    }

    /// Create the engine instance now instead of on the first terminal
    /// operation. No-op when already initialized.
    pub fn initialize(&mut self) -> Result<()> {
        let _cache = DICTIONARY_CACHE.enter();
        self.ensure_ready()
    }

    pub fn extract_text(&mut self) -> Result<String> {
        let _cache = DICTIONARY_CACHE.enter();
        let trim = self.trim;
        let text = self.prepare()?.utf8_text()?;
        if trim {
            Ok(text.trim().to_string())
        } else {
            Ok(text)
        }
    }

    /// hOCR markup for the current image. Never trimmed.
    pub fn extract_hocr(&mut self) -> Result<String> {
        let _cache = DICTIONARY_CACHE.enter();
        self.prepare()?.hocr_text(0)
    }

    /// One box per element at `level`, in reading order.
    pub fn extract_bounding_boxes(&mut self, level: PageIteratorLevel) -> Result<Vec<BoundingBox>> {
        let _cache = DICTIONARY_CACHE.enter();
        self.prepare()?.bounding_boxes(level)
    }

    /// Word boxes parsed from the engine's tab-separated output, carrying the
    /// engine's own block/paragraph/line/word numbers.
    pub fn extract_bounding_boxes_verbose(&mut self) -> Result<Vec<BoundingBox>> {
        let _cache = DICTIONARY_CACHE.enter();
        let tsv = self.prepare()?.tsv_text(0)?;
        parse_tsv_word_boxes(&tsv)
    }

    /// Release the engine instance. Safe to call repeatedly and on a client
    /// that never initialized. The client stays usable: the next terminal
    /// operation initializes a fresh instance.
    pub fn close(&mut self) -> Result<()> {
        let _cache = DICTIONARY_CACHE.enter();
        match std::mem::replace(&mut self.lifecycle, Lifecycle::Uninitialized) {
            Lifecycle::Initialized(engine) | Lifecycle::Invalidated(engine) => {
                engine.release()?;
                debug!("OCR client closed");
            }
            Lifecycle::Uninitialized => {}
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.lifecycle = match std::mem::replace(&mut self.lifecycle, Lifecycle::Uninitialized) {
            Lifecycle::Initialized(engine) => Lifecycle::Invalidated(engine),
            other => other,
        };
    }

    /// Single entry point that brings the engine to `Initialized`.
    fn ensure_ready(&mut self) -> Result<()> {
        let engine = match std::mem::replace(&mut self.lifecycle, Lifecycle::Uninitialized) {
            Lifecycle::Initialized(engine) => engine,
            Lifecycle::Invalidated(stale) => {
                stale.release()?;
                debug!("Released engine invalidated by a configuration change");
                self.start()?
            }
            Lifecycle::Uninitialized => self.start()?,
        };
        self.lifecycle = Lifecycle::Initialized(engine);
        Ok(())
    }

    fn start(&mut self) -> Result<B::Engine> {
        let params = InitParams {
            languages: &self.languages,
            tessdata_prefix: self.tessdata_prefix.as_deref(),
            config_file: self.config_file.as_deref(),
        };
        let languages = params.language_spec();
        let mut engine = self.backend.initialize(&params)?;

        if let Err(err) = self.configure(&mut engine) {
            if let Err(release_err) = engine.release() {
                warn!(error = %release_err, "Failed to release engine after configuration error");
            }
            return Err(OcrError::Initialization(format!(
                "Failed to apply staged configuration: {err}"
            )));
        }

        self.initializations += 1;
        debug!(
            languages = %languages,
            variables = self.variables.len(),
            initializations = self.initializations,
            "OCR engine ready"
        );
        Ok(engine)
    }

    /// Push staged state onto a freshly initialized engine.
    fn configure(&self, engine: &mut B::Engine) -> Result<()> {
        for (variable, value) in &self.variables {
            engine.set_variable(variable.name(), value)?;
        }
        if let Some(mode) = self.page_seg_mode {
            engine.set_page_seg_mode(mode)?;
        }
        Ok(())
    }

    /// Common path of every terminal operation: image check, lazy init,
    /// image hand-off and recognition.
    fn prepare(&mut self) -> Result<&mut B::Engine> {
        if self.image.is_none() {
            return Err(OcrError::Precondition(
                "no image set; call set_image or set_image_from_bytes first".to_string(),
            ));
        }
        self.ensure_ready()?;

        let (Some(image), Some(engine)) = (self.image.as_ref(), self.lifecycle.ready_mut()) else {
            return Err(OcrError::Engine("engine is not initialized".to_string()));
        };
        engine.set_image(image)?;
        if let Some(ppi) = self.source_resolution {
            engine.set_source_resolution(ppi)?;
        }
        engine.recognize()?;
        Ok(engine)
    }
}

impl<B: Backend> Drop for Client<B> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(error = %err, "Failed to release OCR engine on drop");
        }
    }
}

impl<B: Backend> std::fmt::Debug for Client<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("languages", &self.languages)
            .field("variables", &self.variables)
            .field("config_file", &self.config_file)
            .field("tessdata_prefix", &self.tessdata_prefix)
            .field("page_seg_mode", &self.page_seg_mode)
            .field("trim", &self.trim)
            .field("state", &self.lifecycle.name())
            .field("initializations", &self.initializations)
            .finish()
    }
}

fn validate_languages(languages: &[String]) -> Result<()> {
    if languages.is_empty() {
        return Err(OcrError::Validation("languages cannot be empty".to_string()));
    }
    for lang in languages {
        if lang.is_empty() || lang.contains(|c: char| c.is_whitespace() || c == '+') {
            return Err(OcrError::Validation(format!(
                "invalid language identifier: {lang:?}"
            )));
        }
    }
    Ok(())
}
