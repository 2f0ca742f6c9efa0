//! The persisted document format
//!
//! A `<text>` root holds `<p id="1">` paragraphs, `<s id="s1.1">` sentences
//! and `<w id="w1.1.1">` words; word elements carry the surface form as
//! text content and optional `tree` (part-of-speech) and `lem` (lemma)
//! attributes. Output is UTF-8 with an explicit declaration and 2-space
//! indentation. The reader validates ids against element positions, so a
//! parsed document is guaranteed to satisfy the counter invariants.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::document::{Document, Paragraph, Sentence, Word};
use crate::error::{CoreError, Result};

/// Serialize a document to a byte stream
pub fn write_document<W: Write>(document: &Document, writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("text")))?;

    for paragraph in &document.paragraphs {
        let mut p = BytesStart::new("p");
        p.push_attribute(("id", paragraph.id().as_str()));
        xml.write_event(Event::Start(p))?;

        for sentence in &paragraph.sentences {
            let mut s = BytesStart::new("s");
            s.push_attribute(("id", sentence.id().as_str()));
            xml.write_event(Event::Start(s))?;

            for word in &sentence.words {
                let mut w = BytesStart::new("w");
                w.push_attribute(("id", word.id().as_str()));
                if let Some(tag) = &word.tag {
                    w.push_attribute(("tree", tag.as_str()));
                }
                if let Some(lemma) = &word.lemma {
                    w.push_attribute(("lem", lemma.as_str()));
                }
                xml.write_event(Event::Start(w))?;
                xml.write_event(Event::Text(BytesText::new(&word.surface)))?;
                xml.write_event(Event::End(BytesEnd::new("w")))?;
            }
            xml.write_event(Event::End(BytesEnd::new("s")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("p")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("text")))?;

    let mut inner = xml.into_inner();
    inner.write_all(b"\n")?;
    Ok(())
}

/// Serialize a document to a file
pub fn write_document_to_file(document: &Document, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_document(document, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Parse a persisted document back into the tree
pub fn read_document<R: BufRead>(reader: R) -> Result<Document> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut parser = DocumentParser::default();
    let mut buf = Vec::new();
    loop {
        let event = xml
            .read_event_into(&mut buf)
            .map_err(|e| CoreError::Xml(e.to_string()))?;
        match event {
            Event::Start(e) => parser.open(&e)?,
            Event::Empty(e) => {
                parser.open(&e)?;
                parser.close(e.name().as_ref())?;
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| CoreError::Xml(err.to_string()))?
                    .into_owned();
                parser.text(text)?;
            }
            Event::End(e) => parser.close(e.name().as_ref())?,
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            other => {
                return Err(CoreError::Xml(format!("unexpected XML event: {other:?}")));
            }
        }
        buf.clear();
    }
    parser.finish()
}

/// Parse a persisted document from a file
pub fn read_document_from_file(path: &Path) -> Result<Document> {
    let file = File::open(path)?;
    read_document(BufReader::new(file))
}

#[derive(Default)]
struct DocumentParser {
    paragraphs: Vec<Paragraph>,
    paragraph: Option<Paragraph>,
    sentence: Option<Sentence>,
    word: Option<Word>,
    surface: Option<String>,
    seen_root: bool,
    finished: bool,
}

impl DocumentParser {
    fn open(&mut self, element: &BytesStart) -> Result<()> {
        match element.name().as_ref() {
            b"text" => {
                if self.seen_root {
                    return Err(CoreError::Xml("multiple <text> roots".to_string()));
                }
                self.seen_root = true;
            }
            b"p" => {
                let index = self.paragraphs.len() as u32 + 1;
                let id = required_attribute(element, "id")?;
                if id != index.to_string() {
                    return Err(CoreError::Xml(format!(
                        "paragraph id '{id}' does not match position {index}"
                    )));
                }
                self.paragraph = Some(Paragraph {
                    index,
                    sentences: Vec::new(),
                });
            }
            b"s" => {
                let paragraph = self
                    .paragraph
                    .as_ref()
                    .ok_or_else(|| CoreError::Xml("<s> outside of <p>".to_string()))?;
                let sentence = Sentence {
                    index: paragraph.sentences.len() as u32 + 1,
                    paragraph_index: paragraph.index,
                    words: Vec::new(),
                };
                let id = required_attribute(element, "id")?;
                if id != sentence.id() {
                    return Err(CoreError::Xml(format!(
                        "sentence id '{id}' does not match expected '{}'",
                        sentence.id()
                    )));
                }
                self.sentence = Some(sentence);
            }
            b"w" => {
                let sentence = self
                    .sentence
                    .as_ref()
                    .ok_or_else(|| CoreError::Xml("<w> outside of <s>".to_string()))?;
                let mut word = Word {
                    index: sentence.words.len() as u32 + 1,
                    sentence_index: sentence.index,
                    paragraph_index: sentence.paragraph_index,
                    surface: String::new(),
                    tag: None,
                    lemma: None,
                };
                let mut id = None;
                for attr in element.attributes() {
                    let attr = attr.map_err(|e| CoreError::Xml(e.to_string()))?;
                    let value = attr
                        .unescape_value()
                        .map_err(|e| CoreError::Xml(e.to_string()))?
                        .into_owned();
                    match attr.key.as_ref() {
                        b"id" => id = Some(value),
                        b"tree" => word.tag = Some(value),
                        b"lem" => word.lemma = Some(value),
                        other => {
                            return Err(CoreError::Xml(format!(
                                "unknown attribute '{}' on <w>",
                                String::from_utf8_lossy(other)
                            )));
                        }
                    }
                }
                let id = id.ok_or_else(|| CoreError::Xml("<w> without id".to_string()))?;
                if id != word.id() {
                    return Err(CoreError::Xml(format!(
                        "word id '{id}' does not match expected '{}'",
                        word.id()
                    )));
                }
                self.word = Some(word);
                self.surface = None;
            }
            other => {
                return Err(CoreError::Xml(format!(
                    "unknown element <{}>",
                    String::from_utf8_lossy(other)
                )));
            }
        }
        Ok(())
    }

    fn text(&mut self, text: String) -> Result<()> {
        if self.word.is_none() {
            return Err(CoreError::Xml(format!(
                "unexpected text content '{text}' outside of <w>"
            )));
        }
        self.surface = Some(text);
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"w" => {
                let mut word = self
                    .word
                    .take()
                    .ok_or_else(|| CoreError::Xml("unbalanced </w>".to_string()))?;
                word.surface = self
                    .surface
                    .take()
                    .ok_or_else(|| CoreError::Xml(format!("word {} has no text", word.id())))?;
                self.sentence
                    .as_mut()
                    .expect("open word implies open sentence")
                    .words
                    .push(word);
            }
            b"s" => {
                let sentence = self
                    .sentence
                    .take()
                    .ok_or_else(|| CoreError::Xml("unbalanced </s>".to_string()))?;
                self.paragraph
                    .as_mut()
                    .expect("open sentence implies open paragraph")
                    .sentences
                    .push(sentence);
            }
            b"p" => {
                let paragraph = self
                    .paragraph
                    .take()
                    .ok_or_else(|| CoreError::Xml("unbalanced </p>".to_string()))?;
                self.paragraphs.push(paragraph);
            }
            b"text" => {
                self.finished = true;
            }
            other => {
                return Err(CoreError::Xml(format!(
                    "unknown element </{}>",
                    String::from_utf8_lossy(other)
                )));
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Document> {
        if !self.finished {
            return Err(CoreError::Xml("missing <text> root".to_string()));
        }
        if self.paragraphs.is_empty() {
            return Err(CoreError::Xml(
                "document has no paragraphs".to_string(),
            ));
        }
        Ok(Document {
            paragraphs: self.paragraphs,
        })
    }
}

fn required_attribute(element: &BytesStart, name: &str) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| CoreError::Xml(e.to_string()))?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(attr
                .unescape_value()
                .map_err(|e| CoreError::Xml(e.to_string()))?
                .into_owned());
        }
    }
    Err(CoreError::Xml(format!(
        "<{}> without {name}",
        String::from_utf8_lossy(element.name().as_ref())
    )))
}
