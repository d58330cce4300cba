//! Module-level constants and the `Color` enumeration.

use std::fmt;

/// Name reported by the module
pub const APP_NAME: &str = "mylib";

/// π as an `f64`
pub const PI: f64 = std::f64::consts::PI;

/// A small enumeration with stable integer values starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl Color {
    /// All members in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Integer value of the member
    pub fn ordinal(self) -> i64 {
        self as i64
    }

    /// Member name without the enum prefix
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    /// Look a member up by its integer value
    pub fn from_ordinal(value: i64) -> Option<Color> {
        Color::ALL.into_iter().find(|c| c.ordinal() == value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color.{}", self.name())
    }
}
