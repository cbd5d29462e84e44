use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use validator::Validate;

use crate::models::{PageSegMode, Variable};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}

/// Split a language list such as `eng+deu` or `eng, jpn` into identifiers.
pub fn parse_language_list(value: &str) -> Vec<String> {
    value
        .split(['+', ','])
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .collect()
}

/// Settings a `Client` can be built from.
///
/// `Default` reads the process environment:
///
/// | Variable | Field | Default |
/// |---|---|---|
/// | `OCR_LANGUAGES` | `languages` | `eng` |
/// | `TESSDATA_PREFIX` | `tessdata_prefix` | engine default |
/// | `OCR_CONFIG_FILE` | `config_file` | none |
/// | `OCR_TRIM` | `trim` | `true` |
/// | `OCR_PAGE_SEG_MODE` | `page_seg_mode` | engine default |
/// | `OCR_SOURCE_RESOLUTION` | `source_resolution` | none |
/// | `OCR_DISABLE_OUTPUT` | `disable_output` | `false` |
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientConfig {
    #[validate(length(min = 1, message = "languages cannot be empty"))]
    pub languages: Vec<String>,
    pub tessdata_prefix: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    #[serde(default = "default_trim")]
    pub trim: bool,
    pub page_seg_mode: Option<PageSegMode>,
    #[validate(range(min = 1))]
    pub source_resolution: Option<u32>,
    #[serde(default)]
    pub disable_output: bool,
    #[serde(default)]
    pub variables: BTreeMap<Variable, String>,
}

fn default_trim() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        let languages = env::var("OCR_LANGUAGES")
            .map(|val| parse_language_list(&val))
            .ok()
            .filter(|langs| !langs.is_empty())
            .unwrap_or_else(|| vec!["eng".to_string()]);

        Self {
            languages,
            tessdata_prefix: env_path("TESSDATA_PREFIX"),
            config_file: env_path("OCR_CONFIG_FILE"),
            trim: parse_env_or("OCR_TRIM", true),
            page_seg_mode: parse_env_opt("OCR_PAGE_SEG_MODE"),
            source_resolution: parse_env_opt("OCR_SOURCE_RESOLUTION"),
            disable_output: parse_env_or("OCR_DISABLE_OUTPUT", false),
            variables: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TessVariable;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "OCR_LANGUAGES",
        "TESSDATA_PREFIX",
        "OCR_CONFIG_FILE",
        "OCR_TRIM",
        "OCR_PAGE_SEG_MODE",
        "OCR_SOURCE_RESOLUTION",
        "OCR_DISABLE_OUTPUT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_client_config_defaults() {
        clear_env();

        let config = ClientConfig::default();
        assert_eq!(config.languages, vec!["eng".to_string()]);
        assert!(config.tessdata_prefix.is_none());
        assert!(config.config_file.is_none());
        assert!(config.trim);
        assert!(config.page_seg_mode.is_none());
        assert!(config.source_resolution.is_none());
        assert!(!config.disable_output);
        assert!(config.variables.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_client_config_from_env() {
        clear_env();
        env::set_var("OCR_LANGUAGES", "eng+jpn, deu");
        env::set_var("TESSDATA_PREFIX", "/opt/tessdata");
        env::set_var("OCR_TRIM", "false");
        env::set_var("OCR_PAGE_SEG_MODE", "6");
        env::set_var("OCR_SOURCE_RESOLUTION", "300");
        env::set_var("OCR_DISABLE_OUTPUT", "true");

        let config = ClientConfig::from_env();
        assert_eq!(config.languages, vec!["eng", "jpn", "deu"]);
        assert_eq!(config.tessdata_prefix, Some(PathBuf::from("/opt/tessdata")));
        assert!(!config.trim);
        assert_eq!(config.page_seg_mode, Some(PageSegMode::SingleBlock));
        assert_eq!(config.source_resolution, Some(300));
        assert!(config.disable_output);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_fall_back() {
        clear_env();
        env::set_var("OCR_LANGUAGES", " + ,");
        env::set_var("OCR_TRIM", "sometimes");
        env::set_var("OCR_PAGE_SEG_MODE", "42");

        let config = ClientConfig::default();
        assert_eq!(config.languages, vec!["eng".to_string()]);
        assert!(config.trim);
        assert!(config.page_seg_mode.is_none());

        clear_env();
    }

    #[test]
    fn test_empty_languages_fail_validation() {
        let config = ClientConfig {
            languages: Vec::new(),
            tessdata_prefix: None,
            config_file: None,
            trim: true,
            page_seg_mode: None,
            source_resolution: None,
            disable_output: false,
            variables: BTreeMap::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_uses_engine_variable_names() {
        let json = r#"{
            "languages": ["eng"],
            "page_seg_mode": "single_line",
            "variables": {"tessedit_char_whitelist": "0123456789"}
        }"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert!(config.trim);
        assert_eq!(config.page_seg_mode, Some(PageSegMode::SingleLine));
        assert_eq!(
            config.variables.get(&Variable::new(TessVariable::TesseditCharWhitelist)),
            Some(&"0123456789".to_string())
        );
    }

    #[test]
    fn test_parse_language_list() {
        assert_eq!(parse_language_list("eng"), vec!["eng"]);
        assert_eq!(parse_language_list("eng+chi_sim"), vec!["eng", "chi_sim"]);
        assert!(parse_language_list(" , ").is_empty());
    }
}
