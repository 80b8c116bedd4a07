// Tag stream
//
// Pull-style view of an XML document as start tags, character data and end
// tags. Declarations, comments, processing instructions and doctypes are
// dropped. Self-closing elements are expanded into a start/end pair. Names
// and text are decoded with the encoding the document declares.

use super::ParseError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::io::BufRead;

/// A token of the tag stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Start(String),
    End(String),
    Text(String),
    Eof,
}

pub(crate) struct TagStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

fn owned(
    decoded: Result<Cow<'_, str>, quick_xml::Error>,
    position: usize,
) -> Result<String, ParseError> {
    decoded
        .map(Cow::into_owned)
        .map_err(|source| ParseError::Xml { position, source })
}

impl<R: BufRead> TagStream<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);

        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Byte offset of the reader in the input
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            self.buf.clear();
            let token = match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(ref e)) => Token::Start(owned(
                    self.reader.decoder().decode(e.name().as_ref()),
                    self.reader.buffer_position(),
                )?),
                Ok(Event::End(ref e)) => Token::End(owned(
                    self.reader.decoder().decode(e.name().as_ref()),
                    self.reader.buffer_position(),
                )?),
                Ok(Event::Text(ref e)) => {
                    Token::Text(owned(e.unescape(), self.reader.buffer_position())?)
                }
                Ok(Event::CData(ref e)) => {
                    let bytes: &[u8] = e;
                    Token::Text(owned(
                        self.reader.decoder().decode(bytes),
                        self.reader.buffer_position(),
                    )?)
                }
                Ok(Event::Eof) => Token::Eof,
                // Declarations, comments, PIs and doctypes carry nothing we read
                Ok(_) => continue,
                Err(quick_xml::Error::Io(e)) => return Err(ParseError::Io(e)),
                Err(source) => {
                    return Err(ParseError::Xml {
                        position: self.reader.buffer_position(),
                        source,
                    })
                }
            };
            return Ok(token);
        }
    }

    /// Advance to the next start tag and return its name.
    ///
    /// Whitespace is skipped. Other text, an end tag or the end of input
    /// before a start tag is an error.
    pub fn next_tag(&mut self) -> Result<String, ParseError> {
        loop {
            let position = self.position();
            match self.next_token()? {
                Token::Start(name) => return Ok(name),
                Token::Text(text) if text.trim().is_empty() => continue,
                Token::Text(text) => {
                    return Err(ParseError::UnexpectedContent {
                        position,
                        found: format!("text '{}'", text.trim()),
                    })
                }
                Token::End(name) => {
                    return Err(ParseError::UnexpectedContent {
                        position,
                        found: format!("end tag </{}>", name),
                    })
                }
                Token::Eof => return Err(ParseError::EmptyDocument),
            }
        }
    }

    /// Consume the rest of the element whose start tag was just read,
    /// including every nested element, up to and including its end tag
    pub fn skip_element(&mut self, name: &str) -> Result<(), ParseError> {
        self.skip_to_depth(name, 1)
    }

    /// Read the text content of the element whose start tag was just read.
    ///
    /// Character data directly after the start tag is the value. Adjacent
    /// runs split by comments, processing instructions or CDATA sections are
    /// joined. If nested markup follows only whitespace, or comes first, the
    /// value is empty. The element is consumed up to its end tag either way.
    pub fn read_text(&mut self, name: &str) -> Result<String, ParseError> {
        let mut text: Option<String> = None;

        loop {
            match self.next_token()? {
                Token::Text(run) => text.get_or_insert_with(String::new).push_str(&run),
                Token::End(_) => return Ok(text.unwrap_or_default()),
                Token::Start(_) => {
                    // Nested markup: finish the child, then the element itself
                    self.skip_to_depth(name, 2)?;
                    return Ok(text
                        .filter(|value| !value.trim().is_empty())
                        .unwrap_or_default());
                }
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        element: name.to_string(),
                    })
                }
            }
        }
    }

    fn skip_to_depth(&mut self, name: &str, mut depth: usize) -> Result<(), ParseError> {
        while depth > 0 {
            match self.next_token()? {
                Token::Start(_) => depth += 1,
                Token::End(_) => depth -= 1,
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        element: name.to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}
