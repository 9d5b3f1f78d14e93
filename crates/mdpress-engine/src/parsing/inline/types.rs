/// A run of inline text sharing one style.
///
/// Segments are flat: a styled segment never contains other segments, so any
/// markers inside its text are kept literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Unstyled text. The only variant the splitters subdivide further.
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextSegment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::Plain(content.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// The visible text of the segment (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
            Self::Link { text, .. } => text,
            Self::Image { alt, .. } => alt,
        }
    }

    /// The URL of a link or image; `None` for every other variant.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } | Self::Image { url, .. } => Some(url),
            Self::Plain(_) | Self::Bold(_) | Self::Italic(_) | Self::Code(_) => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }
}

/// A style that a paired delimiter introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Code,
}

impl InlineStyle {
    /// Builds the segment of this style around `content`.
    pub fn segment(self, content: impl Into<String>) -> TextSegment {
        let content = content.into();
        match self {
            Self::Bold => TextSegment::Bold(content),
            Self::Italic => TextSegment::Italic(content),
            Self::Code => TextSegment::Code(content),
        }
    }
}
