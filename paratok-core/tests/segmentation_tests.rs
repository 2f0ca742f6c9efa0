//! Structural properties of the assembled document tree

use paratok_core::{DocumentBuilder, SentenceCandidate, Token};
use proptest::prelude::*;

fn candidate(words: &[&str]) -> SentenceCandidate {
    SentenceCandidate::new(words.iter().copied().map(Token::new).collect())
}

fn counted_candidate(line: usize, index: usize, tokens: usize) -> SentenceCandidate {
    SentenceCandidate::new(
        (0..tokens)
            .map(|t| Token::new(format!("t{line}_{index}_{t}")))
            .collect(),
    )
}

#[test]
fn merge_safeguard_keeps_one_sentence() {
    let mut builder = DocumentBuilder::new();
    builder.push_candidates(vec![
        candidate(&["Mr"]),
        candidate(&["Smith", "left", "."]),
    ]);
    let doc = builder.finish();

    assert_eq!(doc.paragraphs.len(), 1);
    let sentences = &doc.paragraphs[0].sentences;
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].id(), "s1.1");
    let ids: Vec<String> = sentences[0].words.iter().map(|w| w.id()).collect();
    assert_eq!(ids, ["w1.1.1", "w1.1.2", "w1.1.3", "w1.1.4"]);
    let surfaces: Vec<&str> = sentences[0]
        .words
        .iter()
        .map(|w| w.surface.as_str())
        .collect();
    assert_eq!(surfaces, ["Mr", "Smith", "left", "."]);
}

#[test]
fn paragraph_boundary_overrides_merge() {
    let mut builder = DocumentBuilder::new();
    builder.push_candidates(vec![candidate(&["Mr"])]);
    builder.start_paragraph();
    builder.push_candidates(vec![candidate(&["Smith", "left", "."])]);
    let doc = builder.finish();

    assert_eq!(doc.paragraphs.len(), 2);
    let first = &doc.paragraphs[0];
    assert_eq!(first.sentences.len(), 1);
    assert_eq!(first.sentences[0].words.len(), 1);
    assert_eq!(first.sentences[0].words[0].surface, "Mr");

    let second = &doc.paragraphs[1];
    assert_eq!(second.sentences[0].id(), "s2.1");
    assert_eq!(second.sentences[0].words[0].id(), "w2.1.1");
}

#[test]
fn one_line_with_two_candidates() {
    let mut builder = DocumentBuilder::new();
    builder.push_candidates(vec![
        candidate(&["Hello", "world", "."]),
        candidate(&["Good", "bye", "."]),
    ]);
    let doc = builder.finish();

    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].id(), "1");
    let sentences = &doc.paragraphs[0].sentences;
    assert_eq!(sentences.len(), 2);
    for (sentence, expected) in sentences.iter().zip(["s1.1", "s1.2"]) {
        assert_eq!(sentence.id(), expected);
        assert_eq!(sentence.words.len(), 3);
    }
    assert_eq!(sentences[0].words[0].id(), "w1.1.1");
    assert_eq!(sentences[0].words[2].id(), "w1.1.3");
    assert_eq!(sentences[1].words[0].id(), "w1.2.1");
    assert_eq!(sentences[1].words[2].id(), "w1.2.3");
}

#[test]
fn building_twice_yields_identical_trees() {
    let lines: Vec<Vec<SentenceCandidate>> = vec![
        vec![candidate(&["One", "."]), candidate(&["Two"])],
        vec![candidate(&["Three", "four", "."])],
    ];

    let build = || {
        let mut builder = DocumentBuilder::new();
        for line in &lines {
            builder.push_candidates(line.clone());
        }
        builder.finish()
    };

    assert_eq!(build(), build());
}

proptest! {
    /// Counter invariants hold for arbitrary candidate shapes: paragraph
    /// indices contiguous from 1, sentence indices contiguous within each
    /// paragraph, word indices contiguous within each sentence.
    #[test]
    fn counters_are_contiguous(
        shape in prop::collection::vec(
            prop::collection::vec(prop::collection::vec(0usize..5, 0..4), 0..4),
            1..4,
        )
    ) {
        let mut builder = DocumentBuilder::new();
        for (p, lines) in shape.iter().enumerate() {
            if p > 0 {
                builder.start_paragraph();
            }
            for (l, candidates) in lines.iter().enumerate() {
                builder.push_candidates(
                    candidates
                        .iter()
                        .enumerate()
                        .map(|(c, tokens)| counted_candidate(l, c, *tokens))
                        .collect::<Vec<_>>(),
                );
            }
        }
        let doc = builder.finish();

        prop_assert_eq!(doc.paragraphs.len(), shape.len());
        for (p, paragraph) in doc.paragraphs.iter().enumerate() {
            prop_assert_eq!(paragraph.index as usize, p + 1);
            for (s, sentence) in paragraph.sentences.iter().enumerate() {
                prop_assert_eq!(sentence.index as usize, s + 1);
                prop_assert_eq!(sentence.paragraph_index, paragraph.index);
                prop_assert!(!sentence.words.is_empty());
                for (w, word) in sentence.words.iter().enumerate() {
                    prop_assert_eq!(word.index as usize, w + 1);
                    prop_assert_eq!(word.sentence_index, sentence.index);
                    prop_assert_eq!(word.paragraph_index, paragraph.index);
                }
            }
        }
    }

    /// No token is dropped or duplicated by the merge safeguard.
    #[test]
    fn merging_preserves_every_token(
        sizes in prop::collection::vec(0usize..5, 0..8)
    ) {
        let mut builder = DocumentBuilder::new();
        builder.push_candidates(
            sizes
                .iter()
                .enumerate()
                .map(|(c, tokens)| counted_candidate(0, c, *tokens))
                .collect::<Vec<_>>(),
        );
        let doc = builder.finish();

        let expected: usize = sizes.iter().sum();
        prop_assert_eq!(doc.word_count(), expected);
    }
}
