// Notices XML parser
//
// Parses notices.xml documents:
//
//   <notices>
//     <notice>
//       <name>...</name>
//       <url>...</url>
//       <copyright>...</copyright>
//       <license>apache2</license>
//     </notice>
//   </notices>
//
// Unknown elements are skipped together with their subtree at every level.

use super::encoding;
use super::tokens::{TagStream, Token};
use super::ParseError;
use crate::license::{License, LicenseResolver};
use crate::notice::{Notice, Notices};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

const NOTICES: &str = "notices";
const NOTICE: &str = "notice";
const NAME: &str = "name";
const URL: &str = "url";
const COPYRIGHT: &str = "copyright";
const LICENSE: &str = "license";

/// Parser for notices XML documents
#[derive(Debug, Clone, Default)]
pub struct NoticesXmlParser {
    resolver: LicenseResolver,
}

impl NoticesXmlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: LicenseResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &LicenseResolver {
        &self.resolver
    }

    /// Parse a notices document.
    ///
    /// The input is consumed and dropped before this returns, whether
    /// parsing succeeded or not.
    pub fn parse<R: Read>(&self, input: R) -> Result<Notices, ParseError> {
        let mut input = BufReader::new(input);

        match encoding::sniff_utf16(&mut input)? {
            Some(utf16) => {
                let utf8 = encoding::transcode(input, utf16)?;
                self.parse_stream(TagStream::new(utf8.as_slice()))
            }
            None => self.parse_stream(TagStream::new(input)),
        }
    }

    fn parse_stream<B: BufRead>(&self, mut stream: TagStream<B>) -> Result<Notices, ParseError> {
        let root = stream.next_tag()?;
        if root != NOTICES {
            return Err(ParseError::UnexpectedRoot {
                expected: NOTICES,
                found: root,
            });
        }

        let notices = self.read_notices(&mut stream)?;
        debug!("Parsed {} notices", notices.len());

        Ok(notices)
    }

    pub fn parse_str(&self, contents: &str) -> Result<Notices, ParseError> {
        self.parse(contents.as_bytes())
    }

    pub fn parse_file(&self, path: &Path) -> Result<Notices, ParseError> {
        let file = File::open(path)?;
        let notices = self.parse(file)?;
        debug!("Parsed notices file {}", path.display());
        Ok(notices)
    }

    fn read_notices<R: BufRead>(
        &self,
        stream: &mut TagStream<R>,
    ) -> Result<Notices, ParseError> {
        let mut notices = Notices::new();

        loop {
            match stream.next_token()? {
                Token::Start(name) if name == NOTICE => {
                    notices.add_notice(self.read_notice(stream)?);
                }
                Token::Start(name) => {
                    trace!("Skipping <{}> in <{}>", name, NOTICES);
                    stream.skip_element(&name)?;
                }
                Token::End(_) => break,
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        element: NOTICES.to_string(),
                    })
                }
            }
        }

        Ok(notices)
    }

    fn read_notice<R: BufRead>(
        &self,
        stream: &mut TagStream<R>,
    ) -> Result<Notice, ParseError> {
        let mut name = String::new();
        let mut url = String::new();
        let mut copyright = String::new();
        let mut license: Option<License> = None;

        loop {
            match stream.next_token()? {
                Token::Start(element) => match element.as_str() {
                    NAME => name = stream.read_text(NAME)?,
                    URL => url = stream.read_text(URL)?,
                    COPYRIGHT => copyright = stream.read_text(COPYRIGHT)?,
                    LICENSE => {
                        let identifier = stream.read_text(LICENSE)?;
                        license = Some(self.resolver.resolve(&identifier));
                    }
                    _ => {
                        trace!("Skipping <{}> in <{}>", element, NOTICE);
                        stream.skip_element(&element)?;
                    }
                },
                Token::End(_) => break,
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        element: NOTICE.to_string(),
                    })
                }
            }
        }

        Ok(Notice::new(name, url, copyright, license))
    }
}
