use std::fmt;

use super::BuildError;

/// A `//` comment. The text never includes the marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SingleLineComment {
    text: String,
}

impl SingleLineComment {
    pub fn builder() -> SingleLineCommentBuilder {
        SingleLineCommentBuilder::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SingleLineComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            f.write_str("//")
        } else {
            write!(f, "// {}", self.text)
        }
    }
}

#[derive(Debug, Default)]
pub struct SingleLineCommentBuilder {
    text: String,
}

impl SingleLineCommentBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn build(self) -> Result<SingleLineComment, BuildError> {
        Ok(SingleLineComment { text: self.text })
    }
}

/// A `/* ... */` comment. A single line renders in the compact one-line
/// form; anything longer expands with `*` line markers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiLineComment {
    lines: Vec<String>,
}

impl MultiLineComment {
    pub fn builder() -> MultiLineCommentBuilder {
        MultiLineCommentBuilder::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for MultiLineComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lines.len() {
            0 => f.write_str("/* */"),
            1 => write!(f, "/* {} */", self.lines[0]),
            _ => {
                writeln!(f, "/*")?;
                for line in &self.lines {
                    if line.is_empty() {
                        writeln!(f, " *")?;
                    } else {
                        writeln!(f, " * {}", line)?;
                    }
                }
                f.write_str(" */")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MultiLineCommentBuilder {
    lines: Vec<String>,
}

impl MultiLineCommentBuilder {
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(self) -> Result<MultiLineComment, BuildError> {
        Ok(MultiLineComment { lines: self.lines })
    }
}
