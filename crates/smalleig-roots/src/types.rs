use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing a root classification from its name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRootError {
    /// The name does not match any quadratic root classification.
    #[error("unknown quadratic root classification: {0:?}")]
    UnknownQuadratic(String),

    /// The name does not match any cubic root classification.
    #[error("unknown cubic root classification: {0:?}")]
    UnknownCubic(String),
}

/// Qualitative structure of the roots of a quadratic polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadraticRoot {
    /// Two distinct real roots, `root[0] > root[1]`.
    Two,
    /// One repeated real root, `root[0] == root[1]`.
    Double,
    /// Complex conjugate pair `root[0] ± i·root[1]`.
    Complex,
}

impl QuadraticRoot {
    /// All variants, in declaration order.
    pub const ALL: [QuadraticRoot; 3] = [Self::Two, Self::Double, Self::Complex];

    /// Short name of the classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Two => "two",
            Self::Double => "double",
            Self::Complex => "complex",
        }
    }

    /// One-line human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Two => "two distinct roots",
            Self::Double => "one double root",
            Self::Complex => "complex conjugate roots",
        }
    }

    /// Whether every root slot holds a real root.
    pub fn is_real(&self) -> bool {
        !matches!(self, Self::Complex)
    }
}

impl fmt::Display for QuadraticRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuadraticRoot {
    type Err = ParseRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRootError::UnknownQuadratic(s.to_string()))
    }
}

/// Qualitative structure of the roots of a monic cubic polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubicRoot {
    /// Only one real root; the other two are a complex pair.
    Single,
    /// One real root of multiplicity three.
    Triple,
    /// One single and one double real root.
    SingleDouble,
    /// Three distinct real roots.
    Three,
}

impl CubicRoot {
    /// All variants, in declaration order.
    pub const ALL: [CubicRoot; 4] = [Self::Single, Self::Triple, Self::SingleDouble, Self::Three];

    /// Short name of the classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Triple => "triple",
            Self::SingleDouble => "single and double",
            Self::Three => "three distinct",
        }
    }

    /// One-line human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Single => "one single root",
            Self::Triple => "one triple root",
            Self::SingleDouble => "a single and a double root",
            Self::Three => "three distinct roots",
        }
    }

    /// Number of root slots that hold real values.
    pub fn real_count(&self) -> usize {
        match self {
            Self::Single => 1,
            _ => 3,
        }
    }
}

impl fmt::Display for CubicRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CubicRoot {
    type Err = ParseRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRootError::UnknownCubic(s.to_string()))
    }
}
