//! Color palette used by rendering code.

use ratatui::style::Color;

/// Application theme palette.
///
/// All colors are [`ratatui::style::Color`] values ready for widget styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Background behind overlays.
    pub mantle: Color,
    /// Darkest shade, used for text on highlighted rows.
    pub crust: Color,
    /// Inactive borders.
    pub surface1: Color,
    /// Panel borders.
    pub surface2: Color,
    /// Muted labels.
    pub overlay1: Color,
    /// Secondary muted text.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text.
    pub subtext0: Color,
    /// Captions.
    pub subtext1: Color,
    /// Informational accent.
    pub sapphire: Color,
    /// Headings and focused borders.
    pub mauve: Color,
    /// Success.
    pub green: Color,
    /// Attention, used for toasts.
    pub yellow: Color,
    /// Errors and the blocking alert.
    pub red: Color,
    /// Selection highlight.
    pub lavender: Color,
}

/// Dark palette the UI is drawn with.
pub const DEFAULT_THEME: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    crust: Color::Rgb(0x11, 0x11, 0x1b),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    surface2: Color::Rgb(0x58, 0x5b, 0x70),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    overlay2: Color::Rgb(0x93, 0x99, 0xb2),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    subtext1: Color::Rgb(0xba, 0xc2, 0xde),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
};

/// Current theme.
#[must_use]
pub const fn theme() -> Theme {
    DEFAULT_THEME
}
