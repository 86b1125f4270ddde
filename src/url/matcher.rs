use crate::ConfigError;
use regex::Regex;

/// The literal catch-all pattern; it admits any path no other pattern matched
pub const CATCH_ALL: &str = "**/*";

/// Translates a glob into an anchored regular expression
///
/// Literal text (dots included) is escaped before `*` is expanded to `.*`,
/// so a `.` in a pattern only ever matches a dot.
///
/// # Examples
///
/// ```
/// use doc_harvest::url::glob_to_regex;
///
/// assert_eq!(glob_to_regex("guide*"), "^guide.*$");
/// assert_eq!(glob_to_regex("v1.*"), "^v1\\..*$");
/// ```
pub fn glob_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("^{}$", body)
}

/// A single compiled URL pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    negated: bool,
    regex: Regex,
}

impl GlobPattern {
    /// Compiles a pattern; a leading `!` marks it as negated
    pub fn compile(pattern: &str) -> Result<Self, ConfigError> {
        let (negated, glob) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let regex = Regex::new(&glob_to_regex(glob))
            .map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", pattern, e)))?;

        Ok(Self {
            raw: pattern.to_string(),
            negated,
            regex,
        })
    }

    /// The pattern as written in the configuration
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Full, case-sensitive match against a path relative to the base URL
    pub fn matches(&self, relative_path: &str) -> bool {
        self.regex.is_match(relative_path)
    }
}

/// An ordered set of URL patterns with negation
///
/// # Evaluation Order
///
/// 1. Any negated pattern matching → rejected
/// 2. First positive pattern (in listed order) matching → accepted
/// 3. Set contains the literal `**/*` → accepted
/// 4. Otherwise → rejected
///
/// An empty set accepts everything.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    negated: Vec<GlobPattern>,
    positive: Vec<GlobPattern>,
    has_catch_all: bool,
}

impl PatternSet {
    /// Compiles every pattern of a preset's `url-patterns` list
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let mut set = Self::default();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let compiled = GlobPattern::compile(pattern)?;

            if compiled.is_negated() {
                set.negated.push(compiled);
            } else {
                if pattern == CATCH_ALL {
                    set.has_catch_all = true;
                }
                set.positive.push(compiled);
            }
        }

        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.negated.is_empty() && self.positive.is_empty()
    }

    /// Decides whether a relative path passes the pattern set
    pub fn allows(&self, relative_path: &str) -> bool {
        if self.is_empty() {
            return true;
        }

        if let Some(pattern) = self.negated.iter().find(|p| p.matches(relative_path)) {
            tracing::trace!("{} negated by pattern {}", relative_path, pattern.as_str());
            return false;
        }

        if let Some(pattern) = self.positive.iter().find(|p| p.matches(relative_path)) {
            tracing::trace!("{} matched pattern {}", relative_path, pattern.as_str());
            return true;
        }

        if self.has_catch_all {
            tracing::trace!("{} allowed by catch-all pattern {}", relative_path, CATCH_ALL);
            return true;
        }

        tracing::trace!("{} did not match any pattern", relative_path);
        false
    }
}
