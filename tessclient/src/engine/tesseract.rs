use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::path::{Path, PathBuf};
use std::ptr;

use leptess::capi;
use tracing::{debug, info};

use super::{Backend, Engine, ImageSource, InitParams, StructureCounter};
use crate::error::{OcrError, Result};
use crate::models::{BoundingBox, PageIteratorLevel, PageSegMode, Rect};

/// Locations distributions install language data to, probed when neither a
/// prefix nor the engine itself can name one.
const WELL_KNOWN_TESSDATA_DIRS: &[&str] = &[
    "/usr/share/tesseract-ocr/5/tessdata",
    "/usr/share/tesseract-ocr/4.00/tessdata",
    "/usr/share/tessdata",
    "/usr/local/share/tessdata",
    "/opt/homebrew/share/tessdata",
];

/// Production backend calling the Tesseract C API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tesseract;

/// One initialized `TessBaseAPI` instance.
///
/// The handle is released on `release` or on drop, whichever comes first.
pub struct TesseractEngine {
    raw: *mut capi::TessBaseAPI,
    image: Option<Pix>,
}

// SAFETY: the handle is owned exclusively and only touched through `&mut self`;
// the engine has no thread affinity. It is deliberately not `Sync`.
unsafe impl Send for TesseractEngine {}

impl Backend for Tesseract {
    type Engine = TesseractEngine;

    fn initialize(&self, params: &InitParams<'_>) -> Result<TesseractEngine> {
        let spec = params.language_spec();
        let languages = CString::new(spec.as_str())
            .map_err(|_| OcrError::Validation(format!("Invalid language list: {spec:?}")))?;
        let datapath = params.tessdata_prefix.map(path_cstring).transpose()?;
        let config = match params.config_file {
            Some(path) if !path.is_file() => {
                return Err(OcrError::Initialization(format!(
                    "Config file not found: {}",
                    path.display()
                )))
            }
            Some(path) => Some(path_cstring(path)?),
            None => None,
        };

        let engine = TesseractEngine::create()?;
        let mut configs = config
            .iter()
            .map(|c| c.as_ptr() as *mut c_char)
            .collect::<Vec<_>>();
        let configs_ptr = if configs.is_empty() {
            ptr::null_mut()
        } else {
            configs.as_mut_ptr()
        };

        let status = unsafe {
            capi::TessBaseAPIInit1(
                engine.raw,
                datapath.as_ref().map_or(ptr::null(), |p| p.as_ptr()),
                languages.as_ptr(),
                capi::TessOcrEngineMode_OEM_DEFAULT,
                configs_ptr,
                configs.len() as c_int,
            )
        };
        if status != 0 {
            return Err(OcrError::Initialization(format!(
                "Failed to initialize Tesseract with languages '{}' (data path: {})",
                spec,
                params
                    .tessdata_prefix
                    .map_or_else(|| "default".to_string(), |p| p.display().to_string())
            )));
        }

        info!(languages = %spec, "Tesseract engine initialized");
        Ok(engine)
    }

    fn version(&self) -> String {
        let raw = unsafe { capi::TessVersion() };
        if raw.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    }

    fn default_datapath(&self) -> Result<PathBuf> {
        let engine = TesseractEngine::create()?;
        let status = unsafe { capi::TessBaseAPIInit3(engine.raw, ptr::null(), ptr::null()) };
        if status == 0 {
            let raw = unsafe { capi::TessBaseAPIGetDatapath(engine.raw) };
            if !raw.is_null() {
                let path = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
                if !path.is_empty() {
                    return Ok(PathBuf::from(path));
                }
            }
        }
        drop(engine);

        WELL_KNOWN_TESSDATA_DIRS
            .iter()
            .map(PathBuf::from)
            .find(|dir| dir.is_dir())
            .ok_or_else(|| {
                OcrError::Initialization(
                    "Could not locate a tessdata directory; set TESSDATA_PREFIX".to_string(),
                )
            })
    }

    fn clear_persistent_cache(&self) -> Result<()> {
        let engine = TesseractEngine::create()?;
        unsafe { capi::TessBaseAPIClearPersistentCache(engine.raw) };
        debug!("Tesseract persistent cache cleared");
        Ok(())
    }
}

impl TesseractEngine {
    fn create() -> Result<Self> {
        let raw = unsafe { capi::TessBaseAPICreate() };
        if raw.is_null() {
            return Err(OcrError::Initialization(
                "Failed to allocate a Tesseract instance".to_string(),
            ));
        }
        Ok(Self { raw, image: None })
    }

    fn end(&mut self) {
        if self.raw.is_null() {
            return;
        }
        unsafe {
            capi::TessBaseAPIEnd(self.raw);
            capi::TessBaseAPIDelete(self.raw);
        }
        self.raw = ptr::null_mut();
        debug!("Tesseract engine released");
    }
}

impl Engine for TesseractEngine {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<()> {
        let c_name = CString::new(name)
            .map_err(|_| OcrError::Validation(format!("Invalid variable name: {name:?}")))?;
        let c_value = CString::new(value)
            .map_err(|_| OcrError::Validation(format!("Invalid value for {name}: {value:?}")))?;
        let ok = unsafe { capi::TessBaseAPISetVariable(self.raw, c_name.as_ptr(), c_value.as_ptr()) };
        if ok == 0 {
            return Err(OcrError::Engine(format!("Tesseract rejected variable {name}")));
        }
        Ok(())
    }

    fn set_page_seg_mode(&mut self, mode: PageSegMode) -> Result<()> {
        unsafe {
            capi::TessBaseAPISetPageSegMode(self.raw, mode.as_raw() as capi::TessPageSegMode)
        };
        Ok(())
    }

    fn set_image(&mut self, image: &ImageSource) -> Result<()> {
        let pix = Pix::read(image)?;
        unsafe { capi::TessBaseAPISetImage2(self.raw, pix.raw.cast()) };
        self.image = Some(pix);
        Ok(())
    }

    fn set_source_resolution(&mut self, ppi: u32) -> Result<()> {
        let ppi = c_int::try_from(ppi)
            .map_err(|_| OcrError::Validation(format!("Source resolution too large: {ppi}")))?;
        unsafe { capi::TessBaseAPISetSourceResolution(self.raw, ppi) };
        Ok(())
    }

    fn recognize(&mut self) -> Result<()> {
        let status = unsafe { capi::TessBaseAPIRecognize(self.raw, ptr::null_mut()) };
        if status != 0 {
            return Err(OcrError::Engine(format!(
                "Recognition failed with status {status}"
            )));
        }
        Ok(())
    }

    fn utf8_text(&mut self) -> Result<String> {
        TessText::new(unsafe { capi::TessBaseAPIGetUTF8Text(self.raw) }, "text")?.to_utf8()
    }

    fn hocr_text(&mut self, page: i32) -> Result<String> {
        TessText::new(
            unsafe { capi::TessBaseAPIGetHOCRText(self.raw, page as c_int) },
            "hOCR text",
        )?
        .to_utf8()
    }

    fn tsv_text(&mut self, page: i32) -> Result<String> {
        TessText::new(
            unsafe { capi::TessBaseAPIGetTsvText(self.raw, page as c_int) },
            "TSV text",
        )?
        .to_utf8()
    }

    fn bounding_boxes(&mut self, level: PageIteratorLevel) -> Result<Vec<BoundingBox>> {
        let raw_level = level.as_raw() as capi::TessPageIteratorLevel;
        let iter = unsafe { capi::TessBaseAPIGetIterator(self.raw) };
        if iter.is_null() {
            return Ok(Vec::new());
        }
        let iter = ResultIterator(iter);

        let mut counter = StructureCounter::default();
        let mut boxes = Vec::new();
        loop {
            let page = unsafe { capi::TessResultIteratorGetPageIterator(iter.0) };
            let [block_num, par_num, line_num, word_num] = counter.advance(level, |structural| {
                let raw = structural.as_raw() as capi::TessPageIteratorLevel;
                unsafe { capi::TessPageIteratorIsAtBeginningOf(page, raw) != 0 }
            });

            let text = unsafe { capi::TessResultIteratorGetUTF8Text(iter.0, raw_level) };
            if !text.is_null() {
                let word = TessText(text).to_utf8()?;
                let confidence =
                    f64::from(unsafe { capi::TessResultIteratorConfidence(iter.0, raw_level) });
                let (mut left, mut top, mut right, mut bottom): (c_int, c_int, c_int, c_int) =
                    (0, 0, 0, 0);
                unsafe {
                    capi::TessPageIteratorBoundingBox(
                        page,
                        raw_level,
                        &mut left,
                        &mut top,
                        &mut right,
                        &mut bottom,
                    )
                };
                boxes.push(BoundingBox {
                    rect: Rect::new(left, top, right, bottom),
                    word,
                    confidence,
                    block_num,
                    par_num,
                    line_num,
                    word_num,
                });
            }

            if unsafe { capi::TessResultIteratorNext(iter.0, raw_level) } == 0 {
                break;
            }
        }

        debug!(level = %level, count = boxes.len(), "Collected bounding boxes");
        Ok(boxes)
    }

    fn release(mut self) -> Result<()> {
        self.end();
        Ok(())
    }
}

impl Drop for TesseractEngine {
    fn drop(&mut self) {
        self.end();
    }
}

/// Leptonica image owned on the Rust side.
struct Pix {
    raw: *mut capi::PIX,
}

impl Pix {
    fn read(image: &ImageSource) -> Result<Self> {
        let raw = match image {
            ImageSource::Path(path) => {
                let c_path = path_cstring(path)?;
                unsafe { capi::pixRead(c_path.as_ptr()) }
            }
            ImageSource::Bytes(bytes) => unsafe { capi::pixReadMem(bytes.as_ptr(), bytes.len() as _) },
        };
        if raw.is_null() {
            let source = match image {
                ImageSource::Path(path) => path.display().to_string(),
                ImageSource::Bytes(bytes) => format!("{} bytes in memory", bytes.len()),
            };
            return Err(OcrError::Engine(format!("Failed to decode image: {source}")));
        }
        Ok(Self { raw })
    }
}

impl Drop for Pix {
    fn drop(&mut self) {
        unsafe { capi::pixDestroy(&mut self.raw) };
    }
}

/// Text allocated by the engine; freed with `TessDeleteText`.
struct TessText(*mut c_char);

impl TessText {
    fn new(raw: *mut c_char, what: &str) -> Result<Self> {
        if raw.is_null() {
            return Err(OcrError::Engine(format!("Tesseract returned no {what}")));
        }
        Ok(Self(raw))
    }

    fn to_utf8(&self) -> Result<String> {
        unsafe { CStr::from_ptr(self.0) }
            .to_str()
            .map(str::to_owned)
            .map_err(|e| OcrError::Engine(format!("Tesseract returned invalid UTF-8: {e}")))
    }
}

impl Drop for TessText {
    fn drop(&mut self) {
        unsafe { capi::TessDeleteText(self.0) };
    }
}

struct ResultIterator(*mut capi::TessResultIterator);

impl Drop for ResultIterator {
    fn drop(&mut self) {
        unsafe { capi::TessResultIteratorDelete(self.0) };
    }
}

fn path_cstring(path: &Path) -> Result<CString> {
    let s = path
        .to_str()
        .ok_or_else(|| OcrError::Validation(format!("Path is not valid UTF-8: {}", path.display())))?;
    CString::new(s).map_err(|_| OcrError::Validation(format!("Path contains NUL byte: {s:?}")))
}
