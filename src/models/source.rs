use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Where the content for one monitored item comes from.
///
/// Parsing never fails: anything that is not an `http`/`https`/`file` URL is
/// taken verbatim as a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SourceReference {
    raw: String,
    location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(Url),
    Local(PathBuf),
}

impl SourceReference {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let location = match Url::parse(&raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => SourceLocation::Remote(url),
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .unwrap_or_else(|_| PathBuf::from(url.path()));
                SourceLocation::Local(path)
            }
            _ => SourceLocation::Local(PathBuf::from(&raw)),
        };

        Self { raw, location }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.location, SourceLocation::Remote(_))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<String> for SourceReference {
    fn from(raw: String) -> Self {
        SourceReference::parse(raw)
    }
}

impl From<&str> for SourceReference {
    fn from(raw: &str) -> Self {
        SourceReference::parse(raw)
    }
}

impl From<SourceReference> for String {
    fn from(source: SourceReference) -> Self {
        source.raw
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
