//! Character themes for the terminal renderer.
//!
//! A [`Theme`] bundles the empty/plotted markers with a [`BorderSet`] so the
//! renderer never hard-codes a glyph.

use std::fmt;
use std::str::FromStr;

/// Box-drawing characters for the frame around the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal bar (top and bottom rows).
    pub horizontal: char,
    /// Vertical bar (left and right of each content row).
    pub vertical: char,
}

impl BorderSet {
    /// Heavy box-drawing lines (`┏━┓`).
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// Light box-drawing lines (`┌─┐`).
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Double box-drawing lines (`╔═╗`).
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Light lines with rounded corners (`╭─╮`).
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Plain 7-bit ASCII (`+-+`).
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::HEAVY
    }
}

/// Named border styles selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// [`BorderSet::HEAVY`].
    #[default]
    Heavy,
    /// [`BorderSet::LIGHT`].
    Light,
    /// [`BorderSet::DOUBLE`].
    Double,
    /// [`BorderSet::ROUNDED`].
    Rounded,
    /// [`BorderSet::ASCII`].
    Ascii,
}

impl BorderStyle {
    /// All styles, in help-text order.
    pub const ALL: [Self; 5] = [Self::Heavy, Self::Light, Self::Double, Self::Rounded, Self::Ascii];

    /// The character set for this style.
    #[must_use]
    pub const fn border_set(self) -> BorderSet {
        match self {
            Self::Heavy => BorderSet::HEAVY,
            Self::Light => BorderSet::LIGHT,
            Self::Double => BorderSet::DOUBLE,
            Self::Rounded => BorderSet::ROUNDED,
            Self::Ascii => BorderSet::ASCII,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heavy => "heavy",
            Self::Light => "light",
            Self::Double => "double",
            Self::Rounded => "rounded",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|st| st.name()).collect();
                format!("unknown border style '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Markers and border used to draw a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Character for cells with no point.
    pub empty: char,
    /// Character for cells with at least one point.
    pub plotted: char,
    /// Frame characters.
    pub border: BorderSet,
}

impl Default for Theme {
    fn default() -> Self {
        Self { empty: '.', plotted: '#', border: BorderSet::HEAVY }
    }
}

impl Theme {
    /// Set the empty-cell marker.
    #[must_use]
    pub const fn with_empty(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    /// Set the plotted-cell marker.
    #[must_use]
    pub const fn with_plotted(mut self, plotted: char) -> Self {
        self.plotted = plotted;
        self
    }

    /// Set the border characters.
    #[must_use]
    pub const fn with_border(mut self, border: BorderSet) -> Self {
        self.border = border;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.empty, '.');
        assert_eq!(theme.plotted, '#');
        assert_eq!(theme.border, BorderSet::HEAVY);
        assert_eq!(theme.border.top_left, '┏');
    }

    #[test]
    fn test_builder() {
        let theme = Theme::default().with_empty(' ').with_plotted('*').with_border(BorderSet::ASCII);
        assert_eq!((theme.empty, theme.plotted), (' ', '*'));
        assert_eq!(theme.border.vertical, '|');
    }

    #[test]
    fn test_border_style_parse() {
        assert_eq!("heavy".parse::<BorderStyle>(), Ok(BorderStyle::Heavy));
        assert_eq!("ASCII".parse::<BorderStyle>(), Ok(BorderStyle::Ascii));
        let err = "dotted".parse::<BorderStyle>().unwrap_err();
        assert!(err.contains("dotted"));
        assert!(err.contains("rounded"));
    }

    #[test]
    fn test_border_style_round_trips_name() {
        for style in BorderStyle::ALL {
            assert_eq!(style.to_string().parse::<BorderStyle>(), Ok(style));
        }
        assert_eq!(BorderStyle::Double.border_set(), BorderSet::DOUBLE);
    }
}
