use crate::error::{GpError, GpResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Target relationship between genotype adjacency and phenotype adjacency.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Adjacent genotypes land in the same or a neighbouring phenotype.
    StronglyOrdered,
    /// Adjacent genotypes skip phenotypes as often as possible.
    #[default]
    MinimallyOrdered,
}

impl OrderingPolicy {
    /// Maps the legacy numeric flag (`1` strong, `2` minimal).
    pub fn from_code(code: u8) -> GpResult<Self> {
        match code {
            1 => Ok(Self::StronglyOrdered),
            2 => Ok(Self::MinimallyOrdered),
            other => Err(GpError::Config(format!(
                "Unrecognized energy policy code {} (expected 1 or 2)",
                other
            ))),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::StronglyOrdered => 1,
            Self::MinimallyOrdered => 2,
        }
    }
}

/// How adjacent genotype pairs are enumerated.
///
/// `Ordered` scores `(g1, g2)` and `(g2, g1)` separately, which is the
/// scale every stored energy uses. `Unordered` halves the adjacency term.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PairCounting {
    #[default]
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyBreakdown {
    /// Adjacent pairs whose phenotypes differ by more than one.
    pub skips: u64,
    /// Adjacent pairs whose phenotypes differ by at most one.
    pub non_skips: u64,
    /// Consecutive buckets with `|b[p]| <= |b[p+1]|`.
    pub size_violations: u32,
    pub adjacency_energy: f64,
    pub size_energy: f64,
    pub total: f64,
}

impl EnergyBreakdown {
    pub fn is_perfect(&self) -> bool {
        self.total == 0.0
    }
}
