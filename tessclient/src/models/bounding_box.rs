use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in image pixel coordinates. `(x1, y1)` is the
/// top-left corner, `(x2, y2)` the exclusive bottom-right corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build from the left/top/width/height form used by the engine's TSV
    /// output. `None` when the far corner does not fit in `i32`.
    pub fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Option<Self> {
        Some(Self {
            x1: left,
            y1: top,
            x2: left.checked_add(width)?,
            y2: top.checked_add(height)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Position, confidence and text of one recognized element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    #[serde(rename = "box")]
    pub rect: Rect,
    pub word: String,
    /// Engine confidence, 0-100.
    pub confidence: f64,
    pub block_num: u32,
    pub par_num: u32,
    pub line_num: u32,
    pub word_num: u32,
}
