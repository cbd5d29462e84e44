use std::str::FromStr;

use crate::error::{OcrError, Result};
use crate::models::{BoundingBox, Rect};

const WORD_LEVEL: u32 = 5;
const COLUMNS: usize = 12;

/// Parse the engine's tab-separated per-element output into word boxes.
///
/// Columns: level, page, block, paragraph, line, word, left, top, width,
/// height, confidence, text. Only level-5 (word) rows produce entries. A
/// leading header row is skipped; any other malformed row is an error.
pub fn parse_tsv_word_boxes(tsv: &str) -> Result<Vec<BoundingBox>> {
    let mut boxes = Vec::new();

    for (idx, row) in tsv.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let cols = row.split('\t').collect::<Vec<_>>();

        let level: u32 = match cols[0].trim().parse() {
            Ok(level) => level,
            Err(_) if idx == 0 => continue,
            Err(_) => {
                return Err(OcrError::Engine(format!(
                    "TSV line {line_no}: invalid level '{}'",
                    cols[0]
                )))
            }
        };
        if level != WORD_LEVEL {
            continue;
        }
        if cols.len() < COLUMNS {
            return Err(OcrError::Engine(format!(
                "TSV line {line_no}: expected {COLUMNS} columns, got {}",
                cols.len()
            )));
        }

        let left: i32 = column(&cols, 6, "left", line_no)?;
        let top: i32 = column(&cols, 7, "top", line_no)?;
        let width: i32 = column(&cols, 8, "width", line_no)?;
        let height: i32 = column(&cols, 9, "height", line_no)?;

        let rect = Rect::from_ltwh(left, top, width, height).ok_or_else(|| {
            OcrError::Engine(format!("TSV line {line_no}: box out of range"))
        })?;

        boxes.push(BoundingBox {
            rect,
            word: cols[11].to_string(),
            confidence: column(&cols, 10, "conf", line_no)?,
            block_num: column(&cols, 2, "block_num", line_no)?,
            par_num: column(&cols, 3, "par_num", line_no)?,
            line_num: column(&cols, 4, "line_num", line_no)?,
            word_num: column(&cols, 5, "word_num", line_no)?,
        });
    }

    Ok(boxes)
}

fn column<T: FromStr>(cols: &[&str], idx: usize, name: &str, line_no: usize) -> Result<T> {
    cols[idx].trim().parse().map_err(|_| {
        OcrError::Engine(format!(
            "TSV line {line_no}: invalid {name} '{}'",
            cols[idx]
        ))
    })
}
