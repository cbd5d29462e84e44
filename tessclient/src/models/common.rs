use serde::{Deserialize, Serialize};

/// Page segmentation mode: the layout the engine assumes while analysing a page.
///
/// Discriminants match the engine's `PSM_*` constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageSegMode {
    /// Orientation and script detection only.
    OsdOnly = 0,
    /// Automatic page segmentation with orientation and script detection.
    AutoOsd = 1,
    /// Automatic page segmentation, but no OSD or OCR.
    AutoOnly = 2,
    /// Fully automatic page segmentation, but no OSD.
    #[default]
    Auto = 3,
    SingleColumn = 4,
    SingleBlockVertText = 5,
    SingleBlock = 6,
    SingleLine = 7,
    SingleWord = 8,
    CircleWord = 9,
    SingleChar = 10,
    /// Find as much text as possible in no particular order.
    SparseText = 11,
    SparseTextOsd = 12,
    /// Treat the image as a single text line, bypassing Tesseract-specific hacks.
    RawLine = 13,
}

impl PageSegMode {
    pub const ALL: [PageSegMode; 14] = [
        Self::OsdOnly,
        Self::AutoOsd,
        Self::AutoOnly,
        Self::Auto,
        Self::SingleColumn,
        Self::SingleBlockVertText,
        Self::SingleBlock,
        Self::SingleLine,
        Self::SingleWord,
        Self::CircleWord,
        Self::SingleChar,
        Self::SparseText,
        Self::SparseTextOsd,
        Self::RawLine,
    ];

    pub fn as_raw(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OsdOnly => "osd_only",
            Self::AutoOsd => "auto_osd",
            Self::AutoOnly => "auto_only",
            Self::Auto => "auto",
            Self::SingleColumn => "single_column",
            Self::SingleBlockVertText => "single_block_vert_text",
            Self::SingleBlock => "single_block",
            Self::SingleLine => "single_line",
            Self::SingleWord => "single_word",
            Self::CircleWord => "circle_word",
            Self::SingleChar => "single_char",
            Self::SparseText => "sparse_text",
            Self::SparseTextOsd => "sparse_text_osd",
            Self::RawLine => "raw_line",
        }
    }
}

impl TryFrom<i32> for PageSegMode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| {
                format!(
                    "Page segmentation mode {value} out of range 0..={}",
                    Self::ALL.len() - 1
                )
            })
    }
}

impl std::fmt::Display for PageSegMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PageSegMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<i32>() {
            return Self::try_from(raw);
        }
        let lowered = s.to_lowercase();
        let name = lowered.strip_prefix("psm_").unwrap_or(&lowered);
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| format!("Unknown page segmentation mode: {s}"))
    }
}

/// Structural granularity used when iterating recognition results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PageIteratorLevel {
    Block = 0,
    Para = 1,
    Textline = 2,
    Word = 3,
    Symbol = 4,
}

impl PageIteratorLevel {
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// How many of block/paragraph/line/word are numbered at this level.
    pub(crate) fn structural_depth(self) -> usize {
        match self {
            Self::Block => 1,
            Self::Para => 2,
            Self::Textline => 3,
            Self::Word | Self::Symbol => 4,
        }
    }
}

impl std::fmt::Display for PageIteratorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Block => write!(f, "block"),
            Self::Para => write!(f, "para"),
            Self::Textline => write!(f, "textline"),
            Self::Word => write!(f, "word"),
            Self::Symbol => write!(f, "symbol"),
        }
    }
}

impl std::str::FromStr for PageIteratorLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "para" | "paragraph" => Ok(Self::Para),
            "textline" | "line" => Ok(Self::Textline),
            "word" => Ok(Self::Word),
            "symbol" | "char" => Ok(Self::Symbol),
            _ => Err(format!("Unknown page iterator level: {s}")),
        }
    }
}
