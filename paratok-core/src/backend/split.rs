//! Shared low-level sentence and word splitting
//!
//! Both the rule-based adapter and the model sentencizers boil down to the
//! same scanning primitives, parametrized by terminator, closer, and
//! abbreviation inventories.

use std::collections::HashSet;

/// Parameters for sentence boundary scanning
pub(crate) struct SplitRules<'a> {
    /// Characters that may end a sentence
    pub terminators: &'a [char],
    /// Closing quotes/brackets that stay attached to the sentence they close
    pub closers: &'a [char],
    /// Lowercased abbreviations whose trailing dot is not a boundary
    pub abbreviations: &'a HashSet<String>,
}

/// Split one line into sentence substrings
pub(crate) fn split_sentences(line: &str, rules: &SplitRules) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];
        if rules.terminators.contains(&ch) && is_boundary(&chars, pos, rules) {
            // Consume runs of terminators ("...", "?!") and trailing closers
            let mut end = pos + 1;
            while end < chars.len() && rules.terminators.contains(&chars[end]) {
                end += 1;
            }
            while end < chars.len() && rules.closers.contains(&chars[end]) {
                end += 1;
            }
            push_sentence(&chars[start..end], &mut sentences);
            start = end;
            pos = end;
        } else {
            pos += 1;
        }
    }
    if start < chars.len() {
        push_sentence(&chars[start..], &mut sentences);
    }
    sentences
}

fn push_sentence(chars: &[char], sentences: &mut Vec<String>) {
    let sentence: String = chars.iter().collect();
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn is_boundary(chars: &[char], pos: usize, rules: &SplitRules) -> bool {
    if chars[pos] != '.' {
        return true;
    }
    let prev = pos.checked_sub(1).map(|i| chars[i]);
    let next = chars.get(pos + 1).copied();

    // Decimal numbers: "3.14"
    if let (Some(p), Some(n)) = (prev, next) {
        if p.is_ascii_digit() && n.is_ascii_digit() {
            return false;
        }
    }

    // Word immediately before the dot
    let mut word_start = pos;
    while word_start > 0 && chars[word_start - 1].is_alphanumeric() {
        word_start -= 1;
    }
    let word: String = chars[word_start..pos].iter().collect();

    // Single-letter initials: "J. Smith"
    if word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()) {
        return false;
    }

    !rules.abbreviations.contains(&word.to_lowercase())
}

/// Split a sentence substring into surface tokens
///
/// Runs of alphanumeric characters form words; `interior` characters stay
/// word-internal when flanked by alphanumerics (apostrophes, hyphens); any
/// other punctuation becomes its own token, with identical consecutive
/// marks grouped ("...", "!!").
pub(crate) fn split_words(text: &str, interior: &[char]) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];
        if ch.is_alphanumeric() {
            current.push(ch);
            pos += 1;
        } else if interior.contains(&ch)
            && !current.is_empty()
            && chars.get(pos + 1).is_some_and(|c| c.is_alphanumeric())
        {
            current.push(ch);
            pos += 1;
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if ch.is_whitespace() {
                pos += 1;
            } else {
                // Group identical consecutive punctuation marks
                let mut mark = String::new();
                while pos < chars.len() && chars[pos] == ch {
                    mark.push(ch);
                    pos += 1;
                }
                words.push(mark);
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
