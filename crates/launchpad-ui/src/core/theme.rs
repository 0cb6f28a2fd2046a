//! Light/dark theme tokens for the launcher shell.

use crate::core::icons::IconKind;

/// Supported theme modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (sun icon).
    #[default]
    Light,
    /// Dark theme (moon icon).
    Dark,
}

impl ThemeMode {
    /// Map the dark-mode flag onto a theme mode.
    #[must_use]
    pub const fn from_dark(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    /// Whether this mode is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable attribute value used on the document element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label shown on the in-menu theme entry.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Light => "Light Theme",
            Self::Dark => "Dark Theme",
        }
    }

    /// Icon that represents the current mode.
    #[must_use]
    pub const fn icon(self) -> IconKind {
        match self {
            Self::Light => IconKind::Sun,
            Self::Dark => IconKind::Moon,
        }
    }

    /// Logo asset variant that reads well on this mode's background.
    #[must_use]
    pub const fn logo(self) -> LogoVariant {
        match self {
            Self::Light => LogoVariant::Standard,
            Self::Dark => LogoVariant::Light,
        }
    }
}

/// Brand logo asset variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoVariant {
    /// Default logo for light backgrounds.
    Standard,
    /// Light-colored logo for dark backgrounds.
    Light,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggled_flips_and_returns() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn visuals_follow_mode() {
        let dark = ThemeMode::from_dark(true);
        assert!(dark.is_dark());
        assert_eq!(dark.menu_label(), "Dark Theme");
        assert_eq!(dark.icon(), IconKind::Moon);
        assert_eq!(dark.logo(), LogoVariant::Light);

        let light = ThemeMode::from_dark(false);
        assert_eq!(light.menu_label(), "Light Theme");
        assert_eq!(light.icon(), IconKind::Sun);
        assert_eq!(light.logo(), LogoVariant::Standard);
    }
}
