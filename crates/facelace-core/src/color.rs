//! Palette color representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A sticker color from the fixed six-color palette.
///
/// # Examples
///
/// ```
/// use facelace_core::Color;
///
/// assert_eq!(Color::Red.notation_letter(), 'R');
/// assert_eq!(Color::from_notation_letter('F'), Some(Color::Green));
/// assert_eq!("orange".parse::<Color>().unwrap(), Color::Orange);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    /// White.
    White = 0,
    /// Yellow.
    Yellow = 1,
    /// Red.
    Red = 2,
    /// Orange.
    Orange = 3,
    /// Blue.
    Blue = 4,
    /// Green.
    Green = 5,
}

impl Color {
    /// All palette colors in palette order.
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Yellow,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::Green,
    ];

    /// Returns the solver notation letter for this color.
    ///
    /// The letter is keyed by the painted color, not by the face the facelet
    /// sits on.
    #[must_use]
    pub const fn notation_letter(self) -> char {
        match self {
            Self::White => 'U',
            Self::Red => 'R',
            Self::Green => 'F',
            Self::Yellow => 'D',
            Self::Orange => 'L',
            Self::Blue => 'B',
        }
    }

    /// Returns the color a notation letter stands for, if any.
    #[must_use]
    pub const fn from_notation_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Self::White),
            'R' => Some(Self::Red),
            'F' => Some(Self::Green),
            'D' => Some(Self::Yellow),
            'L' => Some(Self::Orange),
            'B' => Some(Self::Blue),
            _ => None,
        }
    }

    /// Returns the lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Returns the color name with its first letter capitalized.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// Returns the display color as an `(r, g, b)` triple.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::White => (0xff, 0xff, 0xff),
            Self::Yellow => (0xff, 0xff, 0x00),
            Self::Red => (0xff, 0x00, 0x00),
            Self::Orange => (0xff, 0xa5, 0x00),
            Self::Blue => (0x00, 0x00, 0xff),
            Self::Green => (0x00, 0x80, 0x00),
        }
    }

    /// Returns the zero-based index of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Creates a color from its index in [`Color::ALL`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-5.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::White,
            1 => Self::Yellow,
            2 => Self::Red,
            3 => Self::Orange,
            4 => Self::Blue,
            5 => Self::Green,
            _ => panic!("Invalid color index"),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown color name: {name:?}")]
pub struct ParseColorError {
    name: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseColorError { name: s.to_owned() })
    }
}
