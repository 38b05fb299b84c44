use std::fmt;

use super::{BuildError, CodeKind, Violation};

/// A `/** ... */` documentation comment.
///
/// Condensed javadocs (`/** one line */`) and expanded javadocs render with
/// different spacing; the flag is part of the model so a round trip keeps the
/// original form. The expanded form separates free content from the block
/// tags with a lone ` *` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Javadoc {
    condensed: bool,
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    params: Vec<(String, String)>,
    returns: Option<String>,
    throws: Vec<String>,
}

impl Javadoc {
    pub fn builder() -> JavadocBuilder {
        JavadocBuilder::default()
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    /// Ordered `(name, description)` pairs from `@param` tags.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn returns(&self) -> Option<&str> {
        self.returns.as_deref()
    }

    pub fn throws(&self) -> &[String] {
        &self.throws
    }

    pub fn has_tags(&self) -> bool {
        self.author.is_some()
            || self.version.is_some()
            || self.since.is_some()
            || !self.params.is_empty()
            || self.returns.is_some()
            || !self.throws.is_empty()
    }
}

fn write_tag(f: &mut fmt::Formatter<'_>, tag: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        writeln!(f, " * {}", tag)
    } else {
        writeln!(f, " * {} {}", tag, value)
    }
}

impl fmt::Display for Javadoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.condensed {
            return match self.content.first().map(String::as_str).unwrap_or("") {
                "" => f.write_str("/** */"),
                line => write!(f, "/** {} */", line),
            };
        }
        writeln!(f, "/**")?;
        for line in &self.content {
            if line.is_empty() {
                writeln!(f, " *")?;
            } else {
                writeln!(f, " * {}", line)?;
            }
        }
        if !self.content.is_empty() && self.has_tags() {
            writeln!(f, " *")?;
        }
        if let Some(ref author) = self.author {
            write_tag(f, "@author", author)?;
        }
        if let Some(ref version) = self.version {
            write_tag(f, "@version", version)?;
        }
        if let Some(ref since) = self.since {
            write_tag(f, "@since", since)?;
        }
        for (name, description) in &self.params {
            let value = format!("{} {}", name, description);
            write_tag(f, "@param", value.trim())?;
        }
        if let Some(ref returns) = self.returns {
            write_tag(f, "@return", returns)?;
        }
        for description in &self.throws {
            write_tag(f, "@throws", description)?;
        }
        f.write_str(" */")
    }
}

#[derive(Debug, Default)]
pub struct JavadocBuilder {
    condensed: bool,
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    params: Vec<(String, String)>,
    returns: Option<String>,
    throws: Vec<String>,
}

impl JavadocBuilder {
    pub fn condensed(mut self, condensed: bool) -> Self {
        self.condensed = condensed;
        self
    }

    pub fn content_line(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push((name.into(), description.into()));
        self
    }

    pub fn returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    pub fn throws(mut self, description: impl Into<String>) -> Self {
        self.throws.push(description.into());
        self
    }

    pub fn build(self) -> Result<Javadoc, BuildError> {
        let has_tags = self.author.is_some()
            || self.version.is_some()
            || self.since.is_some()
            || !self.params.is_empty()
            || self.returns.is_some()
            || !self.throws.is_empty();
        let mut problems = Vec::new();
        if self.condensed && has_tags {
            problems.push(Violation::Invalid(
                "A condensed javadoc cannot carry block tags!".to_string(),
            ));
        }
        if self.condensed && self.content.len() > 1 {
            problems.push(Violation::Invalid(
                "A condensed javadoc must fit on a single content line!".to_string(),
            ));
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Javadoc, problems));
        }
        Ok(Javadoc {
            condensed: self.condensed,
            content: self.content,
            author: self.author,
            version: self.version,
            since: self.since,
            params: self.params,
            returns: self.returns,
            throws: self.throws,
        })
    }
}
