//! Letter grades and quality points

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from numeric marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 90 marks and above
    A,
    /// 80 to below 90
    B,
    /// 70 to below 80
    C,
    /// 60 to below 70
    D,
    /// Below 60
    F,
}

impl Grade {
    /// Derive a grade from marks out of 100
    #[must_use]
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Self::A
        } else if marks >= 80.0 {
            Self::B
        } else if marks >= 70.0 {
            Self::C
        } else if marks >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Quality points used for GPA weighting
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Letter as printed on transcripts
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
