//! Budget category names
//!
//! The 50/30/20 rule has exactly three categories. They are a closed set,
//! so they are modelled as an enum rather than looked up by string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// One of the three fixed budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryName {
    Needs,
    Wants,
    Savings,
}

/// An RGB colour used for chart slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. "#FF9999"
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl CategoryName {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Needs, Self::Wants, Self::Savings]
    }

    /// Category names in display order, for prompts
    pub fn names() -> [&'static str; 3] {
        [Self::Needs.name(), Self::Wants.name(), Self::Savings.name()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
        }
    }

    /// Share of income assigned to this category, in percent
    pub fn ratio_percent(&self) -> i64 {
        match self {
            Self::Needs => 50,
            Self::Wants => 30,
            Self::Savings => 20,
        }
    }

    /// Slice colour while the category is within budget
    pub fn light_color(&self) -> Rgb {
        match self {
            Self::Needs => Rgb(0xFF, 0x99, 0x99),
            Self::Wants => Rgb(0xAD, 0xD8, 0xE6),
            Self::Savings => Rgb(0xFF, 0xFF, 0x99),
        }
    }

    /// Slice colour once the category is over budget
    pub fn dark_color(&self) -> Rgb {
        match self {
            Self::Needs => Rgb(0xFF, 0x4C, 0x4C),
            Self::Wants => Rgb(0x33, 0x99, 0xFF),
            Self::Savings => Rgb(0xFF, 0xD6, 0x33),
        }
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CategoryName {
    type Err = TrackerError;

    /// Case-insensitive; "needs", "NEEDS" and " Needs " all resolve to `Needs`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::UnknownCategory(wanted.to_string()))
    }
}
