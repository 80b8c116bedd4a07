// Input encoding
//
// quick-xml decodes ASCII-compatible encodings named in the XML declaration
// itself. UTF-16 input is not ASCII-compatible, so it is transcoded to UTF-8
// up front and its declaration relabelled to match.

use super::ParseError;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use regex::Regex;
use std::io::{BufRead, Read};
use std::sync::OnceLock;
use tracing::debug;

/// Matches the encoding pseudo-attribute of a leading XML declaration
fn declared_encoding_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(\s*<\?xml\b[^>]*?\bencoding\s*=\s*)(["'])[^"']*["']"#)
            .expect("declaration pattern is valid")
    })
}

/// Detect UTF-16 from a byte order mark or from a BOM-less `<?`
pub(crate) fn detect_utf16(prefix: &[u8]) -> Option<&'static Encoding> {
    match prefix {
        [0xFF, 0xFE, ..] | [b'<', 0x00, b'?', 0x00, ..] => Some(UTF_16LE),
        [0xFE, 0xFF, ..] | [0x00, b'<', 0x00, b'?', ..] => Some(UTF_16BE),
        _ => None,
    }
}

/// Peek at the start of `input` and return the UTF-16 variant it uses, if any
pub(crate) fn sniff_utf16<R: BufRead>(
    input: &mut R,
) -> Result<Option<&'static Encoding>, ParseError> {
    let prefix = input.fill_buf()?;
    Ok(detect_utf16(prefix))
}

/// Read all of `input` as `encoding` and return it as UTF-8 bytes
pub(crate) fn transcode<R: Read>(
    mut input: R,
    encoding: &'static Encoding,
) -> Result<Vec<u8>, ParseError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let (text, had_errors) = encoding.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(ParseError::Undecodable {
            encoding: encoding.name(),
        });
    }
    debug!("Transcoded {} bytes of {} input", bytes.len(), encoding.name());

    let text = declared_encoding_pattern().replace(&text, "${1}${2}UTF-8${2}");
    Ok(text.into_owned().into_bytes())
}
