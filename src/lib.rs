//! noticesdialog - Open-source notices parsing and license resolution
//!
//! This library reads `notices.xml` documents listing third-party components
//! and resolves the license identifier of each entry to a license record.
//!
//! # Architecture
//!
//! 1. **Parsing** - Stream the XML document tag by tag into [`Notices`]
//! 2. **License Resolution** - Map `<license>` identifiers to [`License`] values
//! 3. **License Text** - Look up summary and full text through a
//!    [`LicenseTextProvider`]
//! 4. **Reporting** - Output results for the terminal or as JSON
//!
//! ```
//! use noticesdialog::{License, LicenseKind, NoticesXmlParser};
//!
//! let xml = "<notices><notice><name>Lib</name><license>apache2</license></notice></notices>";
//! let notices = NoticesXmlParser::new().parse(xml.as_bytes()).unwrap();
//!
//! let notice = notices.get(0).unwrap();
//! assert_eq!(notice.name(), "Lib");
//! assert_eq!(notice.license(), Some(&License::Known(LicenseKind::Apache2)));
//! ```

pub mod config;
pub mod license;
pub mod notice;
pub mod parser;
pub mod report;

pub use config::Config;
pub use license::{
    DirectoryTextProvider, License, LicenseKind, LicenseResolver, LicenseTextProvider,
    StaticTextProvider,
};
pub use notice::{Notice, Notices};
pub use parser::{ErrorKind, NoticesXmlParser, ParseError};
pub use report::{ReportFormat, Reporter};
