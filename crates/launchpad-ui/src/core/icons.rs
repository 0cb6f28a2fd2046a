//! Symbolic icon references.
//!
//! # Design
//! - Menu logic only deals in [`IconKind`] tags; glyphs are resolved by the view layer.
//! - Serialized names are kebab-case so config files can pick icons for custom entries.

use serde::Deserialize;

/// Closed set of icons the launcher can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Clipboard glyph.
    Clipboard,
    /// Archive box glyph.
    Archive,
    /// Chevron pointing up (menu open affordance).
    Chevron,
    /// User silhouette.
    User,
    /// Circled right arrow (used as the loading indicator).
    ArrowRight,
    /// Logout glyph.
    Logout,
    /// Moon (dark theme).
    Moon,
    /// Sun (light theme).
    Sun,
    /// Circled question mark.
    QuestionMark,
}

impl IconKind {
    /// Every icon, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Clipboard,
            Self::Archive,
            Self::Chevron,
            Self::User,
            Self::ArrowRight,
            Self::Logout,
            Self::Moon,
            Self::Sun,
            Self::QuestionMark,
        ]
    }

    /// Stable identifier, also used as a `data-icon` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clipboard => "clipboard",
            Self::Archive => "archive",
            Self::Chevron => "chevron",
            Self::User => "user",
            Self::ArrowRight => "arrow-right",
            Self::Logout => "logout",
            Self::Moon => "moon",
            Self::Sun => "sun",
            Self::QuestionMark => "question-mark",
        }
    }
}
