//! Sentence boundary splitting
//!
//! Splits chunk text into sentence units on terminal punctuation
//! followed by whitespace and an uppercase letter. The uppercase
//! lookahead keeps most abbreviations and decimal numbers intact;
//! minor over/under-splitting is an accepted trade-off of staying
//! rule-based.

/// Split text into sentences.
///
/// A boundary is a `.`, `?`, or `!` followed by at least one
/// whitespace character and then an uppercase letter. Trailing text
/// without terminal punctuation is kept as a final sentence.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if matches!(ch, '.' | '?' | '!') {
            // Look past the whitespace run for an uppercase sentence opener
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let at_boundary = j > i + 1 && j < chars.len() && chars[j].is_uppercase();

            if at_boundary {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
                i = j;
                continue;
            }
        }

        i += 1;
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}
