//! The paragraph/sentence/word document tree
//!
//! Identifiers are positional: paragraph `i`, sentence `s{i}.{j}`, word
//! `w{i}.{j}.{k}`, all 1-based and contiguous. The rendered ids are derived
//! from stored indices so they cannot drift from the tree structure.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// The root container for one segmented input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in input order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Total number of sentences across all paragraphs
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }

    /// Total number of words across all sentences
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.sentences)
            .map(|s| s.words.len())
            .sum()
    }
}

/// A paragraph, delimited by blank input lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// 1-based paragraph index, unique and increasing in input order
    pub index: u32,
    /// Sentences in input order
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Rendered identifier, the decimal paragraph index
    pub fn id(&self) -> String {
        self.index.to_string()
    }
}

/// A sentence within a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// 1-based sentence index within the owning paragraph
    pub index: u32,
    /// Index of the owning paragraph
    pub paragraph_index: u32,
    /// Words in input order
    pub words: Vec<Word>,
}

impl Sentence {
    /// Rendered identifier, `s{i}.{j}`
    pub fn id(&self) -> String {
        format!("s{}.{}", self.paragraph_index, self.index)
    }
}

/// A word within a sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// 1-based word index within the owning sentence
    pub index: u32,
    /// Index of the owning sentence
    pub sentence_index: u32,
    /// Index of the owning paragraph
    pub paragraph_index: u32,
    /// Surface form
    pub surface: String,
    /// Part-of-speech tag, when the backend annotates
    pub tag: Option<String>,
    /// Lemma, when the backend annotates
    pub lemma: Option<String>,
}

impl Word {
    /// Rendered identifier, `w{i}.{j}.{k}`
    pub fn id(&self) -> String {
        format!(
            "w{}.{}.{}",
            self.paragraph_index, self.sentence_index, self.index
        )
    }

    pub(crate) fn from_token(
        token: Token,
        index: u32,
        sentence_index: u32,
        paragraph_index: u32,
    ) -> Self {
        Self {
            index,
            sentence_index,
            paragraph_index,
            surface: token.surface,
            tag: token.tag,
            lemma: token.lemma,
        }
    }
}
