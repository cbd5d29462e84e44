use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::Backend;
use crate::error::Result;

const TRAINEDDATA_EXT: &str = "traineddata";

/// Language identifiers installed in `dir`, i.e. the stems of its
/// `*.traineddata` files, sorted.
pub fn available_languages_in(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut languages = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(TRAINEDDATA_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            languages.push(stem.to_string());
        }
    }
    languages.sort();
    Ok(languages)
}

/// Directory holding language data: an explicit prefix, then
/// `TESSDATA_PREFIX`, then whatever the engine reports.
pub(crate) fn resolve_datapath<B: Backend>(backend: &B, prefix: Option<&Path>) -> Result<PathBuf> {
    if let Some(prefix) = prefix {
        return Ok(prefix.to_path_buf());
    }
    if let Some(prefix) = env::var_os("TESSDATA_PREFIX").filter(|val| !val.is_empty()) {
        return Ok(PathBuf::from(prefix));
    }
    backend.default_datapath()
}

pub(crate) fn installed_languages<B: Backend>(
    backend: &B,
    prefix: Option<&Path>,
) -> Result<Vec<String>> {
    let dir = resolve_datapath(backend, prefix)?;
    tracing::debug!(dir = %dir.display(), "Listing installed languages");
    available_languages_in(dir)
}
