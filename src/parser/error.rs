use miette::Diagnostic;
use std::sync::Arc;
use thiserror::Error;

/// Broad class of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document is malformed or does not have the notices structure
    Structural,
    /// The input stream failed
    Io,
}

/// Errors from parsing a notices document
#[derive(Error, Debug, Diagnostic)]
pub enum ParseError {
    #[error("Expected root element <{expected}>, found <{found}>")]
    #[diagnostic(
        code(noticesdialog::parse::unexpected_root),
        help("a notices document starts with a <notices> element")
    )]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    #[error("Expected a start tag at byte {position}, found {found}")]
    #[diagnostic(code(noticesdialog::parse::unexpected_content))]
    UnexpectedContent { position: usize, found: String },

    #[error("Document has no root element")]
    #[diagnostic(code(noticesdialog::parse::empty_document))]
    EmptyDocument,

    #[error("Unexpected end of document inside <{element}>")]
    #[diagnostic(code(noticesdialog::parse::unexpected_eof))]
    UnexpectedEof { element: String },

    #[error("Malformed XML at byte {position}: {source}")]
    #[diagnostic(code(noticesdialog::parse::xml))]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Input is not valid {encoding}")]
    #[diagnostic(code(noticesdialog::parse::undecodable))]
    Undecodable { encoding: &'static str },

    #[error("Failed to read notices: {0}")]
    #[diagnostic(code(noticesdialog::parse::io))]
    Io(#[source] Arc<std::io::Error>),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Structural,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(Arc::new(err))
    }
}
