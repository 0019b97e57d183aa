//! Terminal styling for command output.

use console::{Color, Style};
use okcss::colorspace::{readable_text_color, Rgb};

/// Applies styles only when styled output was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn apply(&self, style: &Style, text: &str) -> String {
        if self.enabled {
            style.clone().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.apply(&Style::new().bold(), text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.apply(&Style::new().dim(), text)
    }

    pub fn ok(&self, text: &str) -> String {
        self.apply(&Style::new().green(), text)
    }

    pub fn warn(&self, text: &str) -> String {
        self.apply(&Style::new().yellow(), text)
    }

    pub fn error(&self, text: &str) -> String {
        self.apply(&Style::new().red().bold(), text)
    }

    /// `text` on a background of `hex`, with a legible foreground.
    /// Unparseable colors leave the text unstyled.
    pub fn swatch(&self, hex: &str, text: &str) -> String {
        let Some(background) = Rgb::from_hex(hex) else {
            return text.to_string();
        };
        let foreground = readable_text_color(background);
        let style = Style::new()
            .bg(Color::Color256(rgb_to_ansi256(background)))
            .fg(Color::Color256(rgb_to_ansi256(foreground)));
        self.apply(&style, text)
    }
}

/// Nearest index in the 256-color ANSI palette.
///
/// Grays map onto the 24-step gray ramp, everything else onto the 6×6×6
/// color cube.
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let cube = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * cube(r) + 6 * cube(g) + cube(b)
    }
}
