mod encoding;
mod error;
mod notices;
mod tokens;

pub use error::{ErrorKind, ParseError};
pub use notices::NoticesXmlParser;
