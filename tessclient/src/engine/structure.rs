use crate::models::PageIteratorLevel;

const STRUCTURAL_LEVELS: [PageIteratorLevel; 4] = [
    PageIteratorLevel::Block,
    PageIteratorLevel::Para,
    PageIteratorLevel::Textline,
    PageIteratorLevel::Word,
];

/// Numbers block/paragraph/line/word while walking results in reading order.
///
/// Numbering follows the engine's TSV output: 1-based, and a counter restarts
/// at 1 whenever its parent starts a new element. Counters finer than the
/// iteration level stay 0.
#[derive(Debug, Default)]
pub(crate) struct StructureCounter {
    counts: [u32; 4],
}

impl StructureCounter {
    /// Advance to the next element at `level`. `starts` reports whether the
    /// current element is the first one of an enclosing structural level.
    pub(crate) fn advance(
        &mut self,
        level: PageIteratorLevel,
        mut starts: impl FnMut(PageIteratorLevel) -> bool,
    ) -> [u32; 4] {
        let depth = level.structural_depth();
        let mut parent_started = false;
        for (idx, structural) in STRUCTURAL_LEVELS.iter().take(depth).enumerate() {
            if parent_started {
                self.counts[idx] = 1;
            } else if self.counts[idx] == 0 || starts(*structural) {
                self.counts[idx] += 1;
                parent_started = true;
            }
        }
        for count in self.counts.iter_mut().skip(depth) {
            *count = 0;
        }
        self.counts
    }
}
