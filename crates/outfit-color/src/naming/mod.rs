//! Discrete color naming.
//!
//! [`color_name`] maps an [`Rgb`] triple to one of a small closed set of
//! [`ColorName`]s by walking [`NAMING_RULES`] top to bottom. The first rule
//! whose predicate holds wins; anything no rule claims is
//! [`ColorName::Unknown`].
//!
//! Rule order matters: pure white satisfies the `gray` predicate, and since
//! there is no dedicated white rule it is named gray.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;

/// A named color from the closed naming set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Gray,
    Black,
    /// No naming rule matched
    Unknown,
}

impl ColorName {
    /// Every name, in rule order with `Unknown` last.
    pub const ALL: [ColorName; 8] = [
        ColorName::Red,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Yellow,
        ColorName::Orange,
        ColorName::Gray,
        ColorName::Black,
        ColorName::Unknown,
    ];

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Yellow => "yellow",
            ColorName::Orange => "orange",
            ColorName::Gray => "gray",
            ColorName::Black => "black",
            ColorName::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a known color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorNameError(String);

impl fmt::Display for ParseColorNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorNameError {}

impl FromStr for ColorName {
    type Err = ParseColorNameError;

    /// Parse a lowercase or mixed-case name. `grey` is accepted for `gray`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(ColorName::Red),
            "green" => Ok(ColorName::Green),
            "blue" => Ok(ColorName::Blue),
            "yellow" => Ok(ColorName::Yellow),
            "orange" => Ok(ColorName::Orange),
            "gray" | "grey" => Ok(ColorName::Gray),
            "black" => Ok(ColorName::Black),
            "unknown" => Ok(ColorName::Unknown),
            _ => Err(ParseColorNameError(s.to_string())),
        }
    }
}

/// One entry in the ordered naming list.
#[derive(Clone, Copy)]
pub struct NamingRule {
    /// Name assigned when the predicate holds
    pub name: ColorName,
    /// Channel test
    pub predicate: fn(Rgb) -> bool,
}

impl fmt::Debug for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingRule").field("name", &self.name).finish()
    }
}

/// Ordered naming rules, evaluated top to bottom.
pub const NAMING_RULES: [NamingRule; 7] = [
    NamingRule {
        name: ColorName::Red,
        predicate: |c| c.r > 150 && c.g < 100 && c.b < 100,
    },
    NamingRule {
        name: ColorName::Green,
        predicate: |c| c.g > 150 && c.r < 100 && c.b < 100,
    },
    NamingRule {
        name: ColorName::Blue,
        predicate: |c| c.b > 150 && c.r < 100 && c.g < 100,
    },
    NamingRule {
        name: ColorName::Yellow,
        predicate: |c| c.r > 200 && c.g > 200 && c.b < 100,
    },
    NamingRule {
        name: ColorName::Orange,
        predicate: |c| c.r > 200 && c.g > 100 && c.g <= 200 && c.b < 100,
    },
    NamingRule {
        name: ColorName::Gray,
        predicate: |c| c.r > 100 && c.g > 100 && c.b > 100,
    },
    NamingRule {
        name: ColorName::Black,
        predicate: |c| c.r < 50 && c.g < 50 && c.b < 50,
    },
];

/// Name an RGB color. Total over every triple.
///
/// # Example
/// ```
/// use outfit_color::{color_name, ColorName, Rgb};
///
/// assert_eq!(color_name(Rgb::new(220, 30, 30)), ColorName::Red);
/// assert_eq!(color_name(Rgb::new(255, 255, 255)), ColorName::Gray);
/// assert_eq!(color_name(Rgb::new(120, 60, 200)), ColorName::Unknown);
/// ```
pub fn color_name(rgb: Rgb) -> ColorName {
    NAMING_RULES
        .iter()
        .find(|rule| (rule.predicate)(rgb))
        .map_or(ColorName::Unknown, |rule| rule.name)
}
