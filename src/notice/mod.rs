// Notice records
//
// A notice is the attribution entry for one third-party component. Notices
// are built once by the parser and never modified afterwards.

use crate::license::License;

/// Attribution metadata for one component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    name: String,
    url: String,
    copyright: String,
    license: Option<License>,
}

impl Notice {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        copyright: impl Into<String>,
        license: Option<License>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            copyright: copyright.into(),
            license,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// None when the notice had no <license> element
    pub fn license(&self) -> Option<&License> {
        self.license.as_ref()
    }
}

/// Ordered collection of notices, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    notices: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Notice> {
        self.notices.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.notices.iter()
    }

    pub fn as_slice(&self) -> &[Notice] {
        &self.notices
    }
}

impl IntoIterator for Notices {
    type Item = Notice;
    type IntoIter = std::vec::IntoIter<Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notices {
    type Item = &'a Notice;
    type IntoIter = std::slice::Iter<'a, Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.iter()
    }
}

impl FromIterator<Notice> for Notices {
    fn from_iter<I: IntoIterator<Item = Notice>>(iter: I) -> Self {
        Self {
            notices: iter.into_iter().collect(),
        }
    }
}
