//! # Risk Score
//!
//! A bounded integer in `[0, 100]`. The engine builds scores with
//! [`RiskScore::saturating_from`], which clamps; `TryFrom<u32>` (also used
//! by deserialization) rejects out-of-range values. Either way a
//! `RiskScore` outside the range cannot exist.

use serde::{Deserialize, Serialize};

/// Overall AI-hiring compliance exposure for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    /// Upper bound of the score.
    pub const MAX: u8 = 100;

    /// The zero score.
    pub const ZERO: Self = Self(0);

    /// Clamp an accumulated total into the score range.
    pub fn saturating_from(total: u32) -> Self {
        Self(total.min(u32::from(Self::MAX)) as u8)
    }

    /// The score value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether the score reached the cap.
    pub fn is_saturated(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<u32> for RiskScore {
    type Error = String;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        if v > u32::from(Self::MAX) {
            return Err(format!("risk score {v} exceeds {}", Self::MAX));
        }
        Ok(Self(v as u8))
    }
}

impl From<RiskScore> for u8 {
    fn from(s: RiskScore) -> Self {
        s.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
