/// Content extracted from one fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Absolute URL of the page
    pub url: String,

    /// Extracted markdown, without a section header
    pub text: String,
}

impl PageResult {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}
