//! Client behaviour that does not need a working Tesseract installation

mod common;

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use tessclient::{
    available_languages_in, parse_tsv_word_boxes, Client, ClientConfig, OcrError, PageIteratorLevel,
    PageSegMode, Rect, TessVariable, Variable,
};

#[test]
fn test_new_client_defaults() {
    let client = Client::new();
    assert_eq!(client.languages(), &["eng".to_string()]);
    assert!(client.trim());
    assert!(client.should_init());
    assert!(client.variables().is_empty());
    assert!(client.page_seg_mode().is_none());
}

#[test]
fn test_setters_do_not_initialize() {
    let mut client = Client::new();
    client.set_languages(&["eng", "jpn"]).unwrap();
    client.set_whitelist("abc").unwrap();
    client.set_blacklist("xyz").unwrap();
    client.set_page_seg_mode(PageSegMode::SingleWord).unwrap();
    client.set_source_resolution(300).unwrap();
    client.disable_output().unwrap();

    assert!(client.should_init());
    assert_eq!(client.initializations(), 0);
    assert_eq!(client.variables().len(), 3);
    assert_eq!(client.page_seg_mode(), Some(PageSegMode::SingleWord));
}

#[test]
fn test_empty_languages_rejected() {
    let mut client = Client::new();
    let none: Vec<String> = Vec::new();
    let err = client.set_languages(&none).unwrap_err();
    assert!(matches!(err, OcrError::Validation(_)));
    assert_eq!(client.languages(), &["eng".to_string()]);
}

#[test]
fn test_missing_image_file_rejected() {
    let dir = tempdir().unwrap();
    let mut client = Client::new();
    let err = client.set_image(dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, OcrError::Validation(_)));
    assert!(!client.has_image());
}

#[test]
fn test_extract_without_image_is_precondition_error() {
    let mut client = Client::new();

    assert!(matches!(client.extract_text(), Err(OcrError::Precondition(_))));
    assert!(matches!(client.extract_hocr(), Err(OcrError::Precondition(_))));
    assert!(matches!(
        client.extract_bounding_boxes(PageIteratorLevel::Word),
        Err(OcrError::Precondition(_))
    ));
    assert!(matches!(
        client.extract_bounding_boxes_verbose(),
        Err(OcrError::Precondition(_))
    ));
    assert!(client.should_init());
}

#[test]
fn test_close_is_idempotent() {
    let mut client = Client::new();
    client.close().unwrap();
    client.close().unwrap();
    assert!(client.should_init());
}

#[test]
fn test_unknown_variable_name() {
    let mut client = Client::new();
    let err = client
        .set_variable_by_name("not_a_tesseract_variable", "1")
        .unwrap_err();
    assert!(matches!(err, OcrError::Validation(_)));

    client
        .set_variable_by_name("tessedit_char_whitelist", "0123456789")
        .unwrap();
    assert_eq!(
        client.variables().get(&Variable::new(TessVariable::TesseditCharWhitelist)),
        Some(&"0123456789".to_string())
    );
}

#[test]
fn test_any_leptess_variable_name_is_accepted() {
    let mut client = Client::new();
    client
        .set_variable_by_name("tessedit_ocr_engine_mode", "1")
        .unwrap();
    client.set_variable_by_name("textord_min_linesize", "2.5").unwrap();
    client
        .set_variable(TessVariable::TextordTabfindFindTables, "1")
        .unwrap();

    let names = client
        .variables()
        .keys()
        .map(|v| v.name())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "tessedit_ocr_engine_mode",
            "textord_min_linesize",
            "textord_tabfind_find_tables"
        ]
    );
}

#[test]
fn test_client_from_config() {
    let json = r#"{
        "languages": ["eng", "deu"],
        "trim": false,
        "page_seg_mode": "sparse_text",
        "variables": {"preserve_interword_spaces": "1"}
    }"#;
    let config: ClientConfig = serde_json::from_str(json).unwrap();
    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.languages(), &["eng".to_string(), "deu".to_string()]);
    assert!(!client.trim());
    assert_eq!(client.page_seg_mode(), Some(PageSegMode::SparseText));
    assert_eq!(
        client.variables().get(&Variable::new(TessVariable::PreserveInterwordSpaces)),
        Some(&"1".to_string())
    );
    assert!(client.should_init());
}

#[test]
fn test_client_from_invalid_config() {
    let config = ClientConfig {
        languages: vec!["eng".to_string()],
        tessdata_prefix: None,
        config_file: None,
        trim: true,
        page_seg_mode: None,
        source_resolution: Some(0),
        disable_output: false,
        variables: BTreeMap::new(),
    };
    assert!(matches!(
        Client::from_config(&config),
        Err(OcrError::Validation(_))
    ));
}

#[test]
fn test_parse_tsv_word_boxes() {
    let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t\n\
5\t1\t1\t1\t1\t1\t36\t92\t60\t24\t95.5\tHello\n\
5\t1\t2\t1\t3\t1\t40\t200\t80\t22\t88\tagain\n";

    let boxes = parse_tsv_word_boxes(tsv).unwrap();
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].word, "Hello");
    assert_eq!(boxes[0].rect, Rect::new(36, 92, 96, 116));
    assert!((boxes[0].confidence - 95.5).abs() < f64::EPSILON);
    assert_eq!(
        (boxes[1].block_num, boxes[1].par_num, boxes[1].line_num, boxes[1].word_num),
        (2, 1, 3, 1)
    );
}

#[test]
fn test_available_languages_in_directory() {
    let dir = tempdir().unwrap();
    for name in ["eng.traineddata", "deu.traineddata", "pdf.ttf"] {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }
    assert_eq!(available_languages_in(dir.path()).unwrap(), vec!["deu", "eng"]);
}

#[test]
fn test_in_memory_fixture_accepted() {
    let img = common::render_text(&["HELLO"]);
    let mut client = Client::new();
    client
        .set_image_from_dynamic(&image::DynamicImage::ImageLuma8(img))
        .unwrap();
    assert!(client.has_image());
    assert!(client.should_init());
}
