//! Heuristic scoring tables: success probability and risk tier
//!
//! Both are lookups on the budget percentage (and, for success, the rewards
//! allocation). They do not vary by program year.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SUCCESS_BASE: i32 = 63;
pub const DEFAULT_SUCCESS_FLOOR: i32 = 40;
pub const DEFAULT_SUCCESS_CEILING: i32 = 95;

/// Largest magnitude accepted for a loaded score or adjustment
pub const MAX_SCORE_POINTS: f64 = 1000.0;

/// Parameter terms holding whole score points rather than thresholds
pub const SCORE_POINT_TERMS: [&str; 10] = [
    "success_base",
    "success_floor",
    "success_ceiling",
    "budget_low_adjustment",
    "budget_core_adjustment",
    "budget_stretch_adjustment",
    "budget_high_adjustment",
    "rewards_balanced_adjustment",
    "marketing_led_adjustment",
    "rewards_led_adjustment",
];

pub const DEFAULT_RISK_LOW_MAX: f64 = 3.0;
pub const DEFAULT_RISK_MEDIUM_MAX: f64 = 6.0;

/// Additive success-score table keyed on budget and rewards bands
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessScoring {
    pub base: i32,
    pub floor: i32,
    pub ceiling: i32,

    /// Budget below this is underfunded
    pub budget_low_max: f64,
    pub budget_low_adjustment: i32,
    /// Upper bound (inclusive) of the core band starting at `budget_low_max`
    pub budget_core_max: f64,
    pub budget_core_adjustment: i32,
    /// Upper bound (inclusive) of the stretch band
    pub budget_stretch_max: f64,
    pub budget_stretch_adjustment: i32,
    /// Applied above the stretch band
    pub budget_high_adjustment: i32,

    /// Balanced rewards band, inclusive on both ends
    pub rewards_balanced_min: f64,
    pub rewards_balanced_max: f64,
    pub rewards_balanced_adjustment: i32,
    /// Below the balanced band
    pub marketing_led_adjustment: i32,
    /// Above the balanced band
    pub rewards_led_adjustment: i32,
}

impl Default for SuccessScoring {
    fn default() -> Self {
        Self {
            base: DEFAULT_SUCCESS_BASE,
            floor: DEFAULT_SUCCESS_FLOOR,
            ceiling: DEFAULT_SUCCESS_CEILING,
            budget_low_max: 2.0,
            budget_low_adjustment: -10,
            budget_core_max: 4.0,
            budget_core_adjustment: 12,
            budget_stretch_max: 6.0,
            budget_stretch_adjustment: 15,
            budget_high_adjustment: 8,
            rewards_balanced_min: 50.0,
            rewards_balanced_max: 70.0,
            rewards_balanced_adjustment: 10,
            marketing_led_adjustment: 5,
            rewards_led_adjustment: 3,
        }
    }
}

impl SuccessScoring {
    /// Success probability (percent) clamped to [floor, ceiling]
    pub fn success_probability(&self, budget_pct: f64, rewards_allocation: f64) -> u32 {
        let score = self
            .base
            .saturating_add(self.budget_adjustment(budget_pct))
            .saturating_add(self.rewards_adjustment(rewards_allocation));

        score.max(self.floor).min(self.ceiling).max(0) as u32
    }

    /// Score contribution of the budget band
    /// Values matching no band (NaN) fall through to the high band
    pub fn budget_adjustment(&self, budget_pct: f64) -> i32 {
        if budget_pct < self.budget_low_max {
            self.budget_low_adjustment
        } else if budget_pct <= self.budget_core_max {
            self.budget_core_adjustment
        } else if budget_pct <= self.budget_stretch_max {
            self.budget_stretch_adjustment
        } else {
            self.budget_high_adjustment
        }
    }

    /// Score contribution of the rewards allocation band
    pub fn rewards_adjustment(&self, rewards_allocation: f64) -> i32 {
        if rewards_allocation >= self.rewards_balanced_min
            && rewards_allocation <= self.rewards_balanced_max
        {
            self.rewards_balanced_adjustment
        } else if rewards_allocation < self.rewards_balanced_min {
            self.marketing_led_adjustment
        } else {
            self.rewards_led_adjustment
        }
    }

    pub(crate) fn apply(&mut self, term: &str, value: f64) -> bool {
        let points = value.round() as i32;
        match term {
            "success_base" => self.base = points,
            "success_floor" => self.floor = points,
            "success_ceiling" => self.ceiling = points,
            "budget_low_max" => self.budget_low_max = value,
            "budget_low_adjustment" => self.budget_low_adjustment = points,
            "budget_core_max" => self.budget_core_max = value,
            "budget_core_adjustment" => self.budget_core_adjustment = points,
            "budget_stretch_max" => self.budget_stretch_max = value,
            "budget_stretch_adjustment" => self.budget_stretch_adjustment = points,
            "budget_high_adjustment" => self.budget_high_adjustment = points,
            "rewards_balanced_min" => self.rewards_balanced_min = value,
            "rewards_balanced_max" => self.rewards_balanced_max = value,
            "rewards_balanced_adjustment" => self.rewards_balanced_adjustment = points,
            "marketing_led_adjustment" => self.marketing_led_adjustment = points,
            "rewards_led_adjustment" => self.rewards_led_adjustment = points,
            _ => return false,
        }
        true
    }
}

/// Qualitative risk tier of a program budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Style tag used by presentation layers
    pub fn style_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Budget-percentage breakpoints for the risk tiers (upper bounds inclusive)
#[derive(Debug, Clone, PartialEq)]
pub struct RiskThresholds {
    pub low_max: f64,
    pub medium_max: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: DEFAULT_RISK_LOW_MAX,
            medium_max: DEFAULT_RISK_MEDIUM_MAX,
        }
    }
}

impl RiskThresholds {
    pub fn classify(&self, budget_pct: f64) -> RiskLevel {
        if budget_pct <= self.low_max {
            RiskLevel::Low
        } else if budget_pct <= self.medium_max {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub(crate) fn apply(&mut self, term: &str, value: f64) -> bool {
        match term {
            "risk_low_max" => self.low_max = value,
            "risk_medium_max" => self.medium_max = value,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_probability_examples() {
        let scoring = SuccessScoring::default();

        // 63 + 12 (budget 4 in [2, 4]) + 10 (rewards 60 in [50, 70])
        assert_eq!(scoring.success_probability(4.0, 60.0), 85);
        // 63 - 10 + 3
        assert_eq!(scoring.success_probability(1.0, 80.0), 56);
        // 63 + 15 + 5
        assert_eq!(scoring.success_probability(5.0, 30.0), 83);
        // 63 + 8 + 10
        assert_eq!(scoring.success_probability(9.0, 50.0), 81);
    }

    #[test]
    fn test_budget_band_edges() {
        let scoring = SuccessScoring::default();

        assert_eq!(scoring.budget_adjustment(1.999), -10);
        assert_eq!(scoring.budget_adjustment(2.0), 12);
        assert_eq!(scoring.budget_adjustment(4.0), 12);
        assert_eq!(scoring.budget_adjustment(4.0001), 15);
        assert_eq!(scoring.budget_adjustment(6.0), 15);
        assert_eq!(scoring.budget_adjustment(6.0001), 8);
        assert_eq!(scoring.budget_adjustment(f64::NAN), 8);
    }

    #[test]
    fn test_budget_contribution_increases_up_to_core_band() {
        let scoring = SuccessScoring::default();

        let below = scoring.budget_adjustment(0.0);
        let core = scoring.budget_adjustment(4.0);
        assert!(core > below);
        assert!(scoring.budget_adjustment(5.0) > core);
    }

    #[test]
    fn test_rewards_band_edges() {
        let scoring = SuccessScoring::default();

        assert_eq!(scoring.rewards_adjustment(49.9), 5);
        assert_eq!(scoring.rewards_adjustment(50.0), 10);
        assert_eq!(scoring.rewards_adjustment(70.0), 10);
        assert_eq!(scoring.rewards_adjustment(70.1), 3);
        assert_eq!(scoring.rewards_adjustment(f64::NAN), 3);
    }

    #[test]
    fn test_success_probability_clamped() {
        let generous = SuccessScoring { base: 90, ..Default::default() };
        assert_eq!(generous.success_probability(5.0, 60.0), 95);

        let harsh = SuccessScoring { base: 20, ..Default::default() };
        assert_eq!(harsh.success_probability(1.0, 80.0), 40);
    }

    #[test]
    fn test_extreme_scores_saturate_before_clamp() {
        let scoring = SuccessScoring {
            base: i32::MAX,
            budget_core_adjustment: i32::MAX,
            ..Default::default()
        };
        assert_eq!(scoring.success_probability(4.0, 60.0), 95);

        let scoring = SuccessScoring { base: i32::MIN, ..Default::default() };
        assert_eq!(scoring.success_probability(1.0, 80.0), 40);
    }

    #[test]
    fn test_risk_thresholds_inclusive() {
        let risk = RiskThresholds::default();

        assert_eq!(risk.classify(0.0), RiskLevel::Low);
        assert_eq!(risk.classify(3.0), RiskLevel::Low);
        assert_eq!(risk.classify(3.0001), RiskLevel::Medium);
        assert_eq!(risk.classify(6.0), RiskLevel::Medium);
        assert_eq!(risk.classify(6.5), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_labels() {
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
        assert_eq!(RiskLevel::High.style_class(), "risk-high");
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"Low\"");
    }
}
