//! Strongly-typed value objects used by the vault query.
//!
//! These wrappers enforce the small set of invariants the search backend
//! relies on (an allowed page size, a positive page number) so that once a
//! value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Page size is not one of the sizes offered by the vault.
    #[error("page size must be one of 10, 20, 40 or 60, got {0}")]
    UnsupportedPageSize(usize),
    /// Page numbers start at one.
    #[error("page number must be greater than zero")]
    NonPositivePage,
}

/// Number of brews requested per results page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Ten,
    Twenty,
    Forty,
    Sixty,
}

impl PageSize {
    /// Every page size the vault accepts, smallest first.
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Forty,
        PageSize::Sixty,
    ];

    /// Validates a raw page size against the allowed set.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        match value {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            40 => Ok(Self::Forty),
            60 => Ok(Self::Sixty),
            other => Err(TypeConstraintError::UnsupportedPageSize(other)),
        }
    }

    /// Returns the number of brews per page.
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Forty => 40,
            Self::Sixty => 60,
        }
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// Validates a one-based page number.
pub fn page_number(value: usize) -> Result<usize, TypeConstraintError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(TypeConstraintError::NonPositivePage)
    }
}
