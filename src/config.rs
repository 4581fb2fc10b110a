use serde::{Deserialize, Serialize};

use crate::error::{AprioriError, AprioriResult};

pub const DEFAULT_MIN_SUPPORT: f32 = 0.005;
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.4;

/// What the lift filter does with rules that have more than one item on
/// either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftPolicy {
    /// Keep multi-item rules without computing their lift.
    #[default]
    PassThrough,
    /// Drop multi-item rules.
    Reject,
    /// Compute lift for every rule and apply the same `lift > 1` check.
    Generalized,
}

/// Parameters of one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AprioriConfig {
    /// Fraction of transactions an itemset must appear in, in (0, 1].
    pub min_support: f32,
    /// Minimum confidence of a retained rule, in (0, 1].
    pub min_confidence: f32,
    /// Largest itemset size to mine. `None` mines until a level comes up empty.
    pub max_len: Option<usize>,
    pub lift_policy: LiftPolicy,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_len: None,
            lift_policy: LiftPolicy::default(),
        }
    }
}

impl AprioriConfig {
    pub fn new(min_support: f32, min_confidence: f32) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_lift_policy(mut self, lift_policy: LiftPolicy) -> Self {
        self.lift_policy = lift_policy;
        self
    }

    pub fn validate(&self) -> AprioriResult<()> {
        check_fraction("min_support", self.min_support)?;
        check_fraction("min_confidence", self.min_confidence)?;
        if self.max_len == Some(0) {
            return Err(AprioriError::InvalidMaxLen);
        }
        Ok(())
    }
}

/// Rejects values outside (0, 1], NaN included.
pub(crate) fn check_fraction(name: &'static str, value: f32) -> AprioriResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AprioriError::InvalidParameter { name, value })
    }
}
