//! Configuration types for sandwich-leave evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayCalendar, ReasonCode};

const FOUR_DAYS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const THREE_DAYS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const TWO_DAYS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
const ONE_DAY: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Default fraction of a day charged for a half-day request.
pub const DEFAULT_HALF_DAY_FRACTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Metadata about the leave policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short code identifying the policy (e.g., "standard").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Flat deductions charged when a sandwich pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandwichPenalties {
    /// Friday + Saturday + Sunday.
    pub fri_sat_sun: Decimal,
    /// Saturday + Sunday + Monday.
    pub sat_sun_mon: Decimal,
    /// Friday through Monday as one request.
    pub fri_to_mon: Decimal,
    /// Each half of a split Friday / Monday pair.
    pub split_fri_mon: Decimal,
    /// Single Friday or Monday, filed in advance and approved.
    pub single_advance: Decimal,
    /// Single Friday or Monday, sudden or unapproved.
    pub single_sudden: Decimal,
}

impl Default for SandwichPenalties {
    fn default() -> Self {
        Self {
            fri_sat_sun: FOUR_DAYS,
            sat_sun_mon: FOUR_DAYS,
            fri_to_mon: FOUR_DAYS,
            split_fri_mon: TWO_DAYS,
            single_advance: ONE_DAY,
            single_sudden: THREE_DAYS,
        }
    }
}

impl SandwichPenalties {
    /// Returns the flat penalty for a reason code, or `None` for [`ReasonCode::None`].
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::SandwichPenalties;
    /// use leave_engine::models::ReasonCode;
    /// use rust_decimal::Decimal;
    ///
    /// let penalties = SandwichPenalties::default();
    /// assert_eq!(penalties.for_reason(ReasonCode::SingleSudden), Some(Decimal::new(3, 0)));
    /// assert_eq!(penalties.for_reason(ReasonCode::None), None);
    /// ```
    pub fn for_reason(&self, reason: ReasonCode) -> Option<Decimal> {
        match reason {
            ReasonCode::FriSatSun => Some(self.fri_sat_sun),
            ReasonCode::SatSunMon => Some(self.sat_sun_mon),
            ReasonCode::FriToMon => Some(self.fri_to_mon),
            ReasonCode::SplitFriMon => Some(self.split_fri_mon),
            ReasonCode::SingleAdvance => Some(self.single_advance),
            ReasonCode::SingleSudden => Some(self.single_sudden),
            ReasonCode::None => None,
        }
    }

    /// Policy key under which the penalty for `reason` is configured.
    pub fn policy_key(reason: ReasonCode) -> &'static str {
        match reason {
            ReasonCode::FriSatSun => "penalties.fri_sat_sun",
            ReasonCode::SatSunMon => "penalties.sat_sun_mon",
            ReasonCode::FriToMon => "penalties.fri_to_mon",
            ReasonCode::SplitFriMon => "penalties.split_fri_mon",
            ReasonCode::SingleAdvance => "penalties.single_advance",
            ReasonCode::SingleSudden => "penalties.single_sudden",
            ReasonCode::None => "working_days",
        }
    }

    fn entries(&self) -> [(&'static str, Decimal); 6] {
        [
            ("penalties.fri_sat_sun", self.fri_sat_sun),
            ("penalties.sat_sun_mon", self.sat_sun_mon),
            ("penalties.fri_to_mon", self.fri_to_mon),
            ("penalties.split_fri_mon", self.split_fri_mon),
            ("penalties.single_advance", self.single_advance),
            ("penalties.single_sudden", self.single_sudden),
        ]
    }
}

fn default_half_day_fraction() -> Decimal {
    DEFAULT_HALF_DAY_FRACTION
}

fn default_exempt_single_day_holidays() -> bool {
    true
}

fn default_sibling_window_days() -> u32 {
    1
}

/// Default longest leave range, in calendar days, a request may span.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

fn default_max_range_days() -> u32 {
    DEFAULT_MAX_RANGE_DAYS
}

/// The rules applied by the deduction calculator.
///
/// `SandwichPolicy::default()` reproduces the standard table: 4 days for the
/// three- and four-day weekend bridges, 2 for each half of a split pair, 1 for
/// an advance single Friday/Monday and 3 for a sudden one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandwichPolicy {
    /// Flat penalties per pattern.
    #[serde(default)]
    pub penalties: SandwichPenalties,
    /// Share of a day charged for half-day requests.
    #[serde(default = "default_half_day_fraction")]
    pub half_day_fraction: Decimal,
    /// Whether a single Friday/Monday that is a mandatory holiday costs nothing.
    #[serde(default = "default_exempt_single_day_holidays")]
    pub exempt_single_day_holidays: bool,
    /// Days either side of the adjacent Friday/Monday that sibling lookups cover.
    #[serde(default = "default_sibling_window_days")]
    pub sibling_window_days: u32,
    /// Longest range, in calendar days, a single request may span.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

impl Default for SandwichPolicy {
    fn default() -> Self {
        Self {
            penalties: SandwichPenalties::default(),
            half_day_fraction: DEFAULT_HALF_DAY_FRACTION,
            exempt_single_day_holidays: true,
            sibling_window_days: 1,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}

impl SandwichPolicy {
    /// Checks that penalties are non-negative, the half-day fraction is in
    /// `(0, 1]` and the range limit admits at least one day.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in self.penalties.entries() {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", value),
                });
            }
        }

        if self.half_day_fraction <= Decimal::ZERO || self.half_day_fraction > ONE_DAY {
            return Err(EngineError::InvalidPolicy {
                field: "half_day_fraction".to_string(),
                message: format!("must be greater than 0 and at most 1 (got {})", self.half_day_fraction),
            });
        }

        if self.max_range_days == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "max_range_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Policy configuration file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Sandwich rules.
    #[serde(default)]
    pub sandwich: SandwichPolicy,
}

/// Holiday list file structure (`holidays/<year>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// Holidays listed in the file.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete leave policy configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct LeavePolicyConfig {
    metadata: PolicyMetadata,
    policy: SandwichPolicy,
    calendar: HolidayCalendar,
}

impl LeavePolicyConfig {
    /// Creates a new LeavePolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, policy: SandwichPolicy, calendar: HolidayCalendar) -> Self {
        Self {
            metadata,
            policy,
            calendar,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the sandwich rules.
    pub fn policy(&self) -> &SandwichPolicy {
        &self.policy
    }

    /// Returns the configured holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_penalties() {
        let penalties = SandwichPenalties::default();
        assert_eq!(penalties.fri_sat_sun, dec("4"));
        assert_eq!(penalties.sat_sun_mon, dec("4"));
        assert_eq!(penalties.fri_to_mon, dec("4"));
        assert_eq!(penalties.split_fri_mon, dec("2"));
        assert_eq!(penalties.single_advance, dec("1"));
        assert_eq!(penalties.single_sudden, dec("3"));
    }

    #[test]
    fn test_default_policy_is_valid() {
        let policy = SandwichPolicy::default();
        assert_eq!(policy.half_day_fraction, dec("0.5"));
        assert!(policy.exempt_single_day_holidays);
        assert_eq!(policy.sibling_window_days, 1);
        assert_eq!(policy.max_range_days, 366);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_negative_penalty_is_rejected() {
        let mut policy = SandwichPolicy::default();
        policy.penalties.single_sudden = dec("-1");

        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "penalties.single_sudden");
            }
            other => panic!("Expected InvalidPolicy error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_penalty_is_allowed() {
        let mut policy = SandwichPolicy::default();
        policy.penalties.single_advance = Decimal::ZERO;
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_half_day_fraction_out_of_range_is_rejected() {
        let mut policy = SandwichPolicy::default();
        policy.half_day_fraction = dec("1.5");
        assert!(policy.validate().is_err());

        policy.half_day_fraction = Decimal::ZERO;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let yaml = r#"
penalties:
  fri_sat_sun: "5"
  sat_sun_mon: "5"
  fri_to_mon: "5"
  split_fri_mon: "2.5"
  single_advance: "1"
  single_sudden: "3"
"#;
        let policy: SandwichPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.penalties.fri_to_mon, dec("5"));
        assert_eq!(policy.penalties.split_fri_mon, dec("2.5"));
        assert_eq!(policy.half_day_fraction, dec("0.5"));
        assert!(policy.exempt_single_day_holidays);
        assert_eq!(policy.max_range_days, DEFAULT_MAX_RANGE_DAYS);
    }

    #[test]
    fn test_zero_max_range_days_is_rejected() {
        let mut policy = SandwichPolicy::default();
        policy.max_range_days = 0;

        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "max_range_days");
            }
            other => panic!("Expected InvalidPolicy error, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_key_for_reason() {
        assert_eq!(
            SandwichPenalties::policy_key(ReasonCode::SplitFriMon),
            "penalties.split_fri_mon"
        );
        assert_eq!(SandwichPenalties::policy_key(ReasonCode::None), "working_days");
    }
}
