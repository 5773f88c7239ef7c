//! Text segmentation utilities.
//!
//! Deliberately simple and deterministic: sentences end at `.`, `?` or `!`
//! followed by whitespace, and words are separated by single ASCII spaces.
//! There is no abbreviation, decimal, or URL awareness.

/// Split text into sentences.
///
/// A boundary falls after a terminator that is immediately followed by
/// whitespace. The terminator stays with the sentence it ends and the whole
/// whitespace run after it is consumed. Empty segments are dropped, so a
/// trailing terminator never yields an extra empty sentence. A terminator
/// not followed by whitespace (`e.g.text`) does not split.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }
        if !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            continue;
        }

        let end = idx + ch.len_utf8();
        push_segment(&mut sentences, &text[start..end]);

        // Swallow the whitespace run; the next sentence starts after it.
        start = end;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            start = ws_idx + ws.len_utf8();
            chars.next();
        }
    }

    push_segment(&mut sentences, &text[start..]);
    sentences
}

/// Split a sentence into words on single spaces, discarding empty tokens.
///
/// Only `' '` separates words; tabs and newlines stay inside a word.
pub fn split_words(sentence: &str) -> Vec<&str> {
    sentence.split(' ').filter(|w| !w.is_empty()).collect()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_segment<'a>(sentences: &mut Vec<&'a str>, segment: &'a str) {
    if !segment.is_empty() {
        sentences.push(segment);
    }
}
