//! Resolution of a submitted list name to the store it addresses.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// A single path segment: everything a URL path would mis-parse, plus '/' and '%'.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Which list a mutating request addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// The virtual today list, backed by items that belong to no list.
    Today,
    /// A named custom list.
    Custom(String),
}

impl ListTarget {
    /// Resolve a list name as submitted by a form.
    ///
    /// The today title and a blank name both address the today list.
    pub fn resolve(name: &str, today_title: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name == today_title {
            Self::Today
        } else {
            Self::Custom(name.to_string())
        }
    }

    /// Where to send the browser after a mutation.
    pub fn redirect_path(&self) -> String {
        match self {
            Self::Today => "/".to_string(),
            Self::Custom(name) => format!("/{}", utf8_percent_encode(name, SEGMENT_ENCODE_SET)),
        }
    }
}
