use std::fmt;

/// Extracted text of one source page.
///
/// A document's text content is a `Vec<PageText>` where the index is the
/// 0-based source page number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText(String);

impl PageText {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// True for empty or whitespace-only text
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Split into source lines on explicit newlines only.
    ///
    /// A trailing carriage return is dropped from each line so CRLF text
    /// wraps the same as LF text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

impl From<String> for PageText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for PageText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for PageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
