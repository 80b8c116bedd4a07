//! Integration tests for notices parsing
//!
//! These tests run the parser and resolver together against fixtures and
//! hand-written documents.

use noticesdialog::{ErrorKind, License, LicenseKind, LicenseResolver, NoticesXmlParser, ParseError};
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Reader that records when it is dropped
struct TrackedReader<R> {
    inner: R,
    closed: Arc<AtomicBool>,
}

impl<R> TrackedReader<R> {
    fn new(inner: R) -> (Self, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        (
            Self {
                inner,
                closed: closed.clone(),
            },
            closed,
        )
    }
}

impl<R: Read> Read for TrackedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for TrackedReader<R> {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Reader that yields some bytes, then fails
struct FailingReader {
    prefix: &'static [u8],
    sent: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"));
        }
        self.sent = true;
        let n = self.prefix.len().min(buf.len());
        buf[..n].copy_from_slice(&self.prefix[..n]);
        Ok(n)
    }
}

#[test]
fn test_fixture_notices() {
    let parser = NoticesXmlParser::new();
    let notices = parser.parse_file(&fixtures_path().join("notices.xml")).unwrap();

    let names: Vec<_> = notices.iter().map(|n| n.name()).collect();
    assert_eq!(
        names,
        vec![
            "LicensesDialog",
            "Jackson JSON Processor",
            "Internal Helpers",
            "Acme Widgets"
        ]
    );

    let first = notices.get(0).unwrap();
    assert_eq!(first.url(), "http://psdev.de");
    assert_eq!(first.copyright(), "Copyright 2013 Philip Schiffer <admin@psdev.de>");
    assert_eq!(first.license(), Some(&License::Known(LicenseKind::Apache2)));

    let jackson = notices.get(1).unwrap();
    assert_eq!(jackson.license(), Some(&License::Known(LicenseKind::Lgpl21)));

    let helpers = notices.get(2).unwrap();
    assert_eq!(helpers.url(), "");
    assert_eq!(helpers.license(), None);

    let acme = notices.get(3).unwrap();
    assert_eq!(
        acme.license(),
        Some(&License::custom("Acme Widget License", "https://acme.example/license"))
    );
}

#[test]
fn test_notice_count_matches_document() {
    let parser = NoticesXmlParser::new();

    for count in [0usize, 1, 7] {
        let body: String = (0..count)
            .map(|i| format!("<notice><name>lib{}</name></notice>", i))
            .collect();
        let xml = format!("<notices>{}</notices>", body);

        let notices = parser.parse_str(&xml).unwrap();
        assert_eq!(notices.len(), count);
        for (i, notice) in notices.iter().enumerate() {
            assert_eq!(notice.name(), format!("lib{}", i));
        }
    }
}

#[test]
fn test_unknown_child_is_ignored() {
    let parser = NoticesXmlParser::new();
    let xml = r#"<notices>
        <notice>
            <name>Lib</name>
            <foo>bar</foo>
            <nested><name>wrong</name><license>gpl30</license></nested>
            <url>https://lib.example</url>
            <copyright>(c) Lib</copyright>
            <license>mit</license>
        </notice>
    </notices>"#;

    let notices = parser.parse_str(xml).unwrap();
    let notice = notices.get(0).unwrap();

    assert_eq!(notice.name(), "Lib");
    assert_eq!(notice.url(), "https://lib.example");
    assert_eq!(notice.copyright(), "(c) Lib");
    assert_eq!(notice.license(), Some(&License::Known(LicenseKind::Mit)));
}

#[test]
fn test_unknown_top_level_element_is_ignored() {
    let parser = NoticesXmlParser::new();
    let plain = "<notices><notice><name>A</name></notice><notice><name>B</name></notice></notices>";
    let decorated = r#"<notices>
        <metadata><notice><name>hidden</name></notice></metadata>
        <notice><name>A</name></notice>
        <extra/>
        <notice><name>B</name></notice>
        <metadata>trailing</metadata>
    </notices>"#;

    assert_eq!(
        parser.parse_str(plain).unwrap(),
        parser.parse_str(decorated).unwrap()
    );
}

#[test]
fn test_nested_markup_in_leaf_is_empty() {
    let parser = NoticesXmlParser::new();
    let xml = "<notices><notice><name><b>bold</b></name><url>u</url></notice></notices>";

    let notices = parser.parse_str(xml).unwrap();
    let notice = notices.get(0).unwrap();

    assert_eq!(notice.name(), "");
    assert_eq!(notice.url(), "u");
}

#[test]
fn test_self_closing_notice() {
    let parser = NoticesXmlParser::new();
    let notices = parser.parse_str("<notices><notice/></notices>").unwrap();

    let notice = notices.get(0).unwrap();
    assert_eq!(notice.name(), "");
    assert_eq!(notice.url(), "");
    assert_eq!(notice.copyright(), "");
    assert_eq!(notice.license(), None);
}

#[test]
fn test_text_is_not_trimmed() {
    let parser = NoticesXmlParser::new();
    let notices = parser
        .parse_str("<notices><notice><copyright>\n  Copyright 2024\n</copyright></notice></notices>")
        .unwrap();

    assert_eq!(notices.get(0).unwrap().copyright(), "\n  Copyright 2024\n");
}

#[test]
fn test_unknown_license_falls_back() {
    let parser = NoticesXmlParser::new();
    let notices = parser
        .parse_str("<notices><notice><license>totally-made-up-license</license></notice></notices>")
        .unwrap();

    let license = notices.get(0).unwrap().license().unwrap();
    assert!(!license.is_known());
    assert_eq!(license.name(), "totally-made-up-license");
}

#[test]
fn test_wrong_root_closes_stream() {
    let parser = NoticesXmlParser::new();
    let (reader, closed) = TrackedReader::new("<foo><notice/></foo>".as_bytes());

    let err = parser.parse(reader).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(matches!(err, ParseError::UnexpectedRoot { .. }));
    assert!(closed.load(Ordering::SeqCst));
}

#[test]
fn test_success_closes_stream() {
    let parser = NoticesXmlParser::new();
    let (reader, closed) = TrackedReader::new("<notices/>".as_bytes());

    let notices = parser.parse(reader).unwrap();

    assert!(notices.is_empty());
    assert!(closed.load(Ordering::SeqCst));
}

#[test]
fn test_io_error_propagates_and_closes_stream() {
    let parser = NoticesXmlParser::new();
    let (reader, closed) = TrackedReader::new(FailingReader {
        prefix: b"<notices><notice><name>Li",
        sent: false,
    });

    let err = parser.parse(reader).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(closed.load(Ordering::SeqCst));
}

#[test]
fn test_missing_file_is_io_error() {
    let parser = NoticesXmlParser::new();
    let err = parser
        .parse_file(&fixtures_path().join("does-not-exist.xml"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_empty_document_is_structural() {
    let parser = NoticesXmlParser::new();

    for xml in ["", "   \n", "<?xml version=\"1.0\"?><!-- nothing -->"] {
        let err = parser.parse_str(xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }
}

#[test]
fn test_resolver_catalog_and_fallback() {
    let resolver = LicenseResolver::new();

    let apache = resolver.resolve("apache2");
    assert_eq!(apache.name(), LicenseKind::Apache2.name());
    assert_eq!(apache.url(), LicenseKind::Apache2.url());

    let made_up = resolver.resolve("totally-made-up-license");
    assert!(matches!(made_up, License::Custom { .. }));
}

fn utf16(text: &str, big_endian: bool) -> Vec<u8> {
    let mut bytes = if big_endian { vec![0xFE, 0xFF] } else { vec![0xFF, 0xFE] };
    for unit in text.encode_utf16() {
        let pair = if big_endian { unit.to_be_bytes() } else { unit.to_le_bytes() };
        bytes.extend_from_slice(&pair);
    }
    bytes
}

#[test]
fn test_text_split_by_comment_is_joined() {
    let parser = NoticesXmlParser::new();
    let xml = "<notices><notice>\
        <name>Foo<!-- renamed -->Bar</name>\
        <copyright>\n<![CDATA[(c) A & B]]>\n</copyright>\
        </notice></notices>";

    let notices = parser.parse_str(xml).unwrap();
    let notice = notices.get(0).unwrap();

    assert_eq!(notice.name(), "FooBar");
    assert_eq!(notice.copyright(), "\n(c) A & B\n");
}

#[test]
fn test_whitespace_before_nested_markup_is_empty() {
    let parser = NoticesXmlParser::new();
    let xml = "<notices><notice>\
        <name>\n    <b>Bold</b>\n</name>\
        <url>http://example.com</url>\
        </notice></notices>";

    let notices = parser.parse_str(xml).unwrap();
    let notice = notices.get(0).unwrap();

    assert_eq!(notice.name(), "");
    assert_eq!(notice.url(), "http://example.com");
}

#[test]
fn test_declared_latin1_document() {
    let parser = NoticesXmlParser::new();
    let xml: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
        <notices><notice><name>Caf\xE9</name><copyright>\xA9 2013</copyright></notice></notices>";

    let notices = parser.parse(xml).unwrap();
    let notice = notices.get(0).unwrap();

    assert_eq!(notice.name(), "Caf\u{e9}");
    assert_eq!(notice.copyright(), "\u{a9} 2013");
}

#[test]
fn test_utf16_documents() {
    let parser = NoticesXmlParser::new();
    let xml = "<?xml version=\"1.0\" encoding=\"UTF-16\"?>\
        <notices><notice><name>Caf\u{e9}</name><license>mit</license></notice></notices>";

    for big_endian in [false, true] {
        let bytes = utf16(xml, big_endian);
        let notices = parser.parse(bytes.as_slice()).unwrap();
        let notice = notices.get(0).unwrap();

        assert_eq!(notice.name(), "Caf\u{e9}", "big endian: {}", big_endian);
        assert_eq!(notice.license(), Some(&License::Known(LicenseKind::Mit)));
    }
}

#[test]
fn test_utf16_stream_is_closed() {
    let parser = NoticesXmlParser::new();
    let bytes = utf16("<notices><notice><name>A</name></notice></notices>", false);
    let (reader, closed) = TrackedReader::new(bytes.as_slice());

    let notices = parser.parse(reader).unwrap();

    assert_eq!(notices.len(), 1);
    assert!(closed.load(Ordering::SeqCst));
}
