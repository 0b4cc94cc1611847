//! Styling helpers for terminal output.
//!
//! [`GameStyle`] applies the engine's colors via the `colored` crate, and is
//! implemented for `&str` and `String` so literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn space_style(&self) -> ColoredString;
    fn object_style(&self) -> ColoredString;
    fn player_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn dark_style(&self) -> ColoredString;
    fn ok_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn space_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn object_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn player_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn dark_style(&self) -> ColoredString {
        self.dimmed().truecolor(80, 80, 230)
    }
    fn ok_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold()
    }
    fn section_style(&self) -> ColoredString {
        format!("[{self}]").truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn space_style(&self) -> ColoredString {
        self.as_str().space_style()
    }
    fn object_style(&self) -> ColoredString {
        self.as_str().object_style()
    }
    fn player_style(&self) -> ColoredString {
        self.as_str().player_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn dark_style(&self) -> ColoredString {
        self.as_str().dark_style()
    }
    fn ok_style(&self) -> ColoredString {
        self.as_str().ok_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
}
