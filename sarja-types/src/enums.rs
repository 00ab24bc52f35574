//! Wire enums shared by queries, envelopes, and backends.
//!
//! Each enum carries a stable wire code used in request parsing and response
//! serialization. Parsing is case-insensitive; serialization always emits the
//! canonical code.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SarjaError;

/// Reporting frequency of a series or a query.
///
/// [`Frequency::Native`] resolves to the series' recorded frequency before any
/// processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Frequency {
    /// Resolve to the series' native frequency.
    #[default]
    #[serde(rename = "native")]
    Native,
    /// Daily observations.
    #[serde(rename = "D")]
    Daily,
    /// Weekly observations.
    #[serde(rename = "W")]
    Weekly,
    /// Monthly observations.
    #[serde(rename = "M")]
    Monthly,
    /// Quarterly observations.
    #[serde(rename = "Q")]
    Quarterly,
    /// Annual observations.
    #[serde(rename = "A")]
    Annual,
}

impl Frequency {
    /// Stable wire code for this frequency.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Daily => "D",
            Self::Weekly => "W",
            Self::Monthly => "M",
            Self::Quarterly => "Q",
            Self::Annual => "A",
        }
    }

    /// Number of observation periods per calendar year at this frequency.
    ///
    /// This is the lookback lag used by year-over-year transforms. `Native`
    /// must be resolved before transforming; it falls back to 1 like `Annual`.
    #[must_use]
    pub const fn periods_per_year(&self) -> usize {
        match self {
            Self::Native | Self::Annual => 1,
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Weekly => 52,
            Self::Daily => 365,
        }
    }

    /// Resolve `Native` against the concrete frequency a series is recorded at.
    #[must_use]
    pub const fn resolve(self, native: Self) -> Self {
        match self {
            Self::Native => native,
            other => other,
        }
    }
}

impl FromStr for Frequency {
    type Err = SarjaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "d" => Ok(Self::Daily),
            "w" => Ok(Self::Weekly),
            "m" => Ok(Self::Monthly),
            "q" => Ok(Self::Quarterly),
            "a" => Ok(Self::Annual),
            _ => Err(SarjaError::invalid_parameter(
                "invalid frequency code; supported values: native,D,W,M,Q,A",
            )),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Statistical transform applied to an observation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Transform {
    /// Pass observations through untouched.
    #[default]
    AsIs,
    /// First difference against the previous observation.
    Diff,
    /// Percent change against the previous observation.
    PctChange,
    /// Alias of [`Transform::PctChange`] kept as a distinct wire code.
    Mom,
    /// Percent change against the observation one year earlier.
    Yoy,
    /// Percent change against the first observation of the calendar year.
    Ytd,
}

impl Transform {
    /// Stable wire code for this transform.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AsIs => "as_is",
            Self::Diff => "diff",
            Self::PctChange => "pct_change",
            Self::Mom => "mom",
            Self::Yoy => "yoy",
            Self::Ytd => "ytd",
        }
    }
}

impl FromStr for Transform {
    type Err = SarjaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "as_is" => Ok(Self::AsIs),
            "diff" => Ok(Self::Diff),
            "pct_change" => Ok(Self::PctChange),
            "mom" => Ok(Self::Mom),
            "yoy" => Ok(Self::Yoy),
            "ytd" => Ok(Self::Ytd),
            _ => Err(SarjaError::invalid_parameter(
                "invalid transform code; supported values: as_is,yoy,mom,pct_change,ytd,diff",
            )),
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Policy for filling missing observations after transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FillPolicy {
    /// Leave missing observations missing.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Carry the last seen value forward; leading gaps stay missing.
    #[serde(rename = "ffill")]
    ForwardFill,
    /// Carry the next seen value backward; trailing gaps stay missing.
    #[serde(rename = "bfill")]
    BackwardFill,
}

impl FillPolicy {
    /// Stable wire code for this policy.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ForwardFill => "ffill",
            Self::BackwardFill => "bfill",
        }
    }
}

impl FromStr for FillPolicy {
    type Err = SarjaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "ffill" => Ok(Self::ForwardFill),
            "bfill" => Ok(Self::BackwardFill),
            _ => Err(SarjaError::invalid_parameter(
                "invalid fill policy; supported values: none,ffill,bfill",
            )),
        }
    }
}

impl std::fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
