//! Configuration options for tree rendering

/// Line terminator appended after every rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style `\n`
    #[default]
    Lf,
    /// Windows-style `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options for rendering an element tree to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces per indent level
    pub indent_size: usize,

    /// Line terminator
    pub line_ending: LineEnding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            line_ending: LineEnding::Lf,
        }
    }
}
