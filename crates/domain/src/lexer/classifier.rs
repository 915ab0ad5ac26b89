// crates/domain/src/lexer/classifier.rs
use keyword_census_shared_kernel::{Keyword, KeywordTally};

use super::state::ScanState;

/// Counts keyword occurrences in `text` that lie outside comments and literals.
///
/// The match is a raw prefix test at every code position, so `publicly`
/// counts as `public`. Unterminated comments and literals are tolerated;
/// whatever state the scanner ends in is discarded.
pub fn scan(text: &[u8]) -> KeywordTally {
    let mut tally = KeywordTally::zero();
    let mut state = ScanState::Code;

    for (pos, &byte) in text.iter().enumerate() {
        if state.is_keyword_eligible()
            && let Some(keyword) = keyword_at(text, pos)
        {
            tally.record(keyword);
        }
        state = state.next(byte);
    }

    tally
}

#[inline]
pub fn scan_str(text: &str) -> KeywordTally {
    scan(text.as_bytes())
}

/// First keyword, in priority order, that `text[pos..]` starts with.
pub fn keyword_at(text: &[u8], pos: usize) -> Option<Keyword> {
    let rest = text.get(pos..)?;
    // every keyword starts with one of these
    if !matches!(rest.first(), Some(b'p' | b't' | b'c')) {
        return None;
    }
    Keyword::ALL.into_iter().find(|keyword| rest.starts_with(keyword.as_bytes()))
}
