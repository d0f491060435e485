//! Semester model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic term a course is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl Semester {
    /// All semesters in menu order
    pub const ALL: [Self; 3] = [Self::Spring, Self::Summer, Self::Fall];

    /// Human-readable name (e.g., "Spring")
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }

    /// Upper-case code used in CSV files (e.g., "SPRING")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }

    /// Look up a semester by its 1-based menu position
    #[must_use]
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            _ => Err(format!("Unknown semester: '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("fall".parse::<Semester>(), Ok(Semester::Fall));
        assert_eq!(" Spring ".parse::<Semester>(), Ok(Semester::Spring));
        assert!("WINTER".parse::<Semester>().is_err());
    }

    #[test]
    fn test_menu_index_is_one_based() {
        assert_eq!(Semester::from_menu_index(1), Some(Semester::Spring));
        assert_eq!(Semester::from_menu_index(3), Some(Semester::Fall));
        assert_eq!(Semester::from_menu_index(0), None);
        assert_eq!(Semester::from_menu_index(4), None);
    }
}
