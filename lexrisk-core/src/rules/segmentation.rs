use crate::error::AnalysisError;
use crate::types::Sentence;
use regex::Regex;
use std::sync::LazyLock;

// One or more sentence terminators in a row ("...", "?!")
static SENTENCE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Trim chars at or below U+0020 only; NBSP and other Unicode spaces stay.
pub fn trim_ascii_space(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

fn trim_ascii_space_start(text: &str) -> &str {
    text.trim_start_matches(|c: char| c <= ' ')
}

/// Reject null-equivalent input before any stage runs.
pub fn ensure_not_blank(text: &str) -> Result<(), AnalysisError> {
    if trim_ascii_space(text).is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(())
}

/// Split text into candidate clause fragments.
///
/// Fragments are separated by runs of `.`, `!` and `?`, trimmed, and kept only
/// when longer than `min_fragment_chars` characters. No abbreviation or
/// quotation handling: "Inc. agrees" splits after "Inc".
pub fn split_into_sentences(
    text: &str,
    min_fragment_chars: usize,
) -> Result<Vec<Sentence>, AnalysisError> {
    ensure_not_blank(text)?;

    let mut sentences = Vec::new();
    let mut cursor = CharCursor::default();
    let mut piece_start = 0;

    let breaks = SENTENCE_BREAK_REGEX
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .chain(std::iter::once((text.len(), text.len())));

    for (break_start, break_end) in breaks {
        let piece = &text[piece_start..break_start];
        let trimmed = trim_ascii_space(piece);

        if trimmed.chars().count() > min_fragment_chars {
            let leading = piece.len() - trim_ascii_space_start(piece).len();
            let byte_start = piece_start + leading;
            let byte_end = byte_start + trimmed.len();

            let source_start = cursor.advance_to(text, byte_start);
            let source_end = cursor.advance_to(text, byte_end);

            sentences.push(Sentence {
                text: trimmed.to_string(),
                source_start,
                source_end,
            });
        }

        piece_start = break_end;
    }

    tracing::debug!(fragments = sentences.len(), "segmented input text");
    Ok(sentences)
}

/// Converts increasing byte offsets to char offsets without rescanning the prefix.
#[derive(Debug, Default)]
struct CharCursor {
    byte: usize,
    chars: usize,
}

impl CharCursor {
    fn advance_to(&mut self, text: &str, byte: usize) -> usize {
        self.chars += text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
