//! Sandwich pattern detection.
//!
//! This module recognises leave requests that bridge a weekend. Patterns are
//! checked in a fixed priority order and the first match wins:
//!
//! | Priority | Pattern | Shape |
//! |---|---|---|
//! | 1 | `FRI_SAT_SUN` | 3 days starting Friday |
//! | 2 | `SAT_SUN_MON` | 3 days starting Saturday |
//! | 3 | `FRI_TO_MON` | 4 days starting Friday |
//! | 4 | `SPLIT_FRI_MON` | single Friday/Monday with a sibling on the other side of the weekend |
//! | 5 | `SINGLE_ADVANCE` | single Friday/Monday, approved and filed in advance |
//! | 6 | `SINGLE_SUDDEN` | single Friday/Monday, sudden or unapproved |
//!
//! Multi-day shapes come first so a Friday inside a four-day block is never
//! also judged as a single day, and the split check precedes the single-day
//! rules so two one-day filings across a weekend are charged as a pair.

use chrono::{Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AuditStep, AuditWarning, LeaveRequest, ReasonCode, SiblingRequest};

use super::day_range::DayRange;
use super::sudden_leave::{LeaveNotice, detect_sudden_leave};

/// Days between a Friday and the following Monday.
const WEEKEND_BRIDGE_DAYS: u64 = 3;

/// A recognised weekend-bridging leave shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SandwichPattern {
    /// Friday, Saturday and Sunday.
    FriSatSun,
    /// Saturday, Sunday and Monday.
    SatSunMon,
    /// Friday through Monday in one request.
    FriToMon,
    /// Friday and Monday filed separately.
    SplitFriMon,
    /// Single Friday or Monday, approved with advance notice.
    SingleAdvance,
    /// Single Friday or Monday, sudden or unapproved.
    SingleSudden,
}

impl SandwichPattern {
    /// All patterns, most specific first.
    pub const PRIORITY_ORDER: [SandwichPattern; 6] = [
        SandwichPattern::FriSatSun,
        SandwichPattern::SatSunMon,
        SandwichPattern::FriToMon,
        SandwichPattern::SplitFriMon,
        SandwichPattern::SingleAdvance,
        SandwichPattern::SingleSudden,
    ];

    /// Position in the evaluation order, starting at 1.
    pub fn priority(&self) -> u8 {
        match self {
            SandwichPattern::FriSatSun => 1,
            SandwichPattern::SatSunMon => 2,
            SandwichPattern::FriToMon => 3,
            SandwichPattern::SplitFriMon => 4,
            SandwichPattern::SingleAdvance => 5,
            SandwichPattern::SingleSudden => 6,
        }
    }

    /// The reason code reported when this pattern fires.
    pub fn reason_code(&self) -> ReasonCode {
        match self {
            SandwichPattern::FriSatSun => ReasonCode::FriSatSun,
            SandwichPattern::SatSunMon => ReasonCode::SatSunMon,
            SandwichPattern::FriToMon => ReasonCode::FriToMon,
            SandwichPattern::SplitFriMon => ReasonCode::SplitFriMon,
            SandwichPattern::SingleAdvance => ReasonCode::SingleAdvance,
            SandwichPattern::SingleSudden => ReasonCode::SingleSudden,
        }
    }

    /// Whether the pattern is defined for half-day requests.
    pub fn supports_half_day(&self) -> bool {
        matches!(
            self,
            SandwichPattern::SingleAdvance | SandwichPattern::SingleSudden
        )
    }
}

impl std::fmt::Display for SandwichPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason_code())
    }
}

/// Read-only access to an employee's other leave applications.
///
/// Implementations return the siblings overlapping the inclusive window
/// `[from, to]`. Entries for other employees must be left out; entries with no
/// employee id may be returned and are reported by the matcher.
pub trait SiblingProvider {
    /// Returns the applications overlapping `[from, to]` for `employee_id`.
    fn siblings_between(&self, employee_id: &str, from: NaiveDate, to: NaiveDate)
    -> Vec<SiblingRequest>;
}

impl SiblingProvider for [SiblingRequest] {
    fn siblings_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<SiblingRequest> {
        self.iter()
            .filter(|s| s.overlaps(from, to))
            .filter(|s| s.employee_id.as_deref().is_none_or(|id| id == employee_id))
            .cloned()
            .collect()
    }
}

impl SiblingProvider for Vec<SiblingRequest> {
    fn siblings_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<SiblingRequest> {
        self.as_slice().siblings_between(employee_id, from, to)
    }
}

/// A provider with no sibling applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSiblings;

impl SiblingProvider for NoSiblings {
    fn siblings_between(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Vec<SiblingRequest> {
        Vec::new()
    }
}

/// Returns the day on the other side of the weekend for a Friday or Monday.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::adjacent_bridge_day;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
///
/// assert_eq!(adjacent_bridge_day(friday), Some(monday));
/// assert_eq!(adjacent_bridge_day(monday), Some(friday));
/// assert_eq!(adjacent_bridge_day(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()), None);
/// ```
pub fn adjacent_bridge_day(date: NaiveDate) -> Option<NaiveDate> {
    use chrono::Datelike;

    match date.weekday() {
        Weekday::Fri => date.checked_add_days(Days::new(WEEKEND_BRIDGE_DAYS)),
        Weekday::Mon => date.checked_sub_days(Days::new(WEEKEND_BRIDGE_DAYS)),
        _ => None,
    }
}

/// The window of dates a caller should fetch sibling applications for.
///
/// Only single-day Friday or Monday requests need siblings; everything else
/// returns `None`. The window is the adjacent Monday (or Friday) widened by
/// `window_days` on each side.
pub fn sibling_lookup_window(
    request: &LeaveRequest,
    window_days: u32,
) -> Option<(NaiveDate, NaiveDate)> {
    if !request.is_single_day() {
        return None;
    }
    let target = adjacent_bridge_day(request.start_date)?;
    let widen = Days::new(u64::from(window_days));
    Some((
        target.checked_sub_days(widen)?,
        target.checked_add_days(widen)?,
    ))
}

/// The outcome of pattern matching for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// The matched pattern, if any.
    pub pattern: Option<SandwichPattern>,
    /// The sibling that completed a split Friday/Monday pair.
    pub split_partner: Option<SiblingRequest>,
    /// Advance/sudden classification, when it was needed.
    pub notice: Option<LeaveNotice>,
    /// Audit steps, numbered from the step number passed in.
    pub audit_steps: Vec<AuditStep>,
    /// Data-quality warnings raised while reading siblings.
    pub warnings: Vec<AuditWarning>,
}

struct Matcher<'a, S: SiblingProvider + ?Sized> {
    request: &'a LeaveRequest,
    range: &'a DayRange,
    siblings: &'a S,
    window_days: u32,
    next_step: u32,
    audit_steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
    notice: Option<LeaveNotice>,
    split_partner: Option<Option<SiblingRequest>>,
}

impl<S: SiblingProvider + ?Sized> Matcher<'_, S> {
    fn matches(&mut self, pattern: SandwichPattern) -> bool {
        let days = self.range.num_days();
        let first = self.range.start_weekday();

        match pattern {
            SandwichPattern::FriSatSun => days == 3 && first == Weekday::Fri,
            SandwichPattern::SatSunMon => days == 3 && first == Weekday::Sat,
            SandwichPattern::FriToMon => days == 4 && first == Weekday::Fri,
            SandwichPattern::SplitFriMon => {
                self.is_single_bridge_day() && self.split_partner().is_some()
            }
            SandwichPattern::SingleAdvance => {
                self.is_single_bridge_day()
                    && self.notice() == LeaveNotice::Advance
                    && self.request.approved
            }
            SandwichPattern::SingleSudden => {
                self.is_single_bridge_day()
                    && (self.notice() == LeaveNotice::Sudden || !self.request.approved)
            }
        }
    }

    fn is_single_bridge_day(&self) -> bool {
        self.range.is_single_day() && adjacent_bridge_day(self.range.start()).is_some()
    }

    fn notice(&mut self) -> LeaveNotice {
        if let Some(notice) = self.notice {
            return notice;
        }
        let detection = detect_sudden_leave(
            self.request.submitted_at,
            self.request.start_date,
            self.next_step,
        );
        self.next_step += 1;
        self.audit_steps.push(detection.audit_step);
        self.notice = Some(detection.notice);
        detection.notice
    }

    fn split_partner(&mut self) -> Option<SiblingRequest> {
        if let Some(partner) = &self.split_partner {
            return partner.clone();
        }

        let partner = self.find_split_partner();
        self.split_partner = Some(partner.clone());
        partner
    }

    fn find_split_partner(&mut self) -> Option<SiblingRequest> {
        let target = adjacent_bridge_day(self.range.start())?;
        let (from, to) = sibling_lookup_window(self.request, self.window_days)?;
        let employee_id = self.request.employee_id.as_str();

        for sibling in self.siblings.siblings_between(employee_id, from, to) {
            match sibling.employee_id.as_deref() {
                None => {
                    warn!(
                        leave_id = %self.request.id,
                        sibling_start = %sibling.start_date,
                        "Sibling request without employee id skipped"
                    );
                    self.warnings.push(AuditWarning {
                        code: "SIBLING_MISSING_EMPLOYEE_ID".to_string(),
                        message: format!(
                            "Sibling request {} to {} has no employee id and was ignored",
                            sibling.start_date, sibling.end_date
                        ),
                        severity: "medium".to_string(),
                    });
                }
                Some(id) if id == employee_id && sibling.covers(target) => {
                    return Some(sibling);
                }
                Some(_) => {}
            }
        }

        None
    }
}

/// Matches a request against the sandwich patterns in priority order.
///
/// `range` must be the expanded range of `request`. The sibling provider is
/// only consulted for single-day Friday/Monday requests, and the sudden-leave
/// detector only when a single-day rule is reached.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{NoSiblings, SandwichPattern, expand_range, match_sandwich_pattern};
/// use leave_engine::models::LeaveRequest;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let request = LeaveRequest {
///     id: "leave_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 26).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
///     is_half_day: false,
///     submitted_at: NaiveDateTime::parse_from_str("2025-09-20 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     approved: true,
/// };
/// let range = expand_range(request.start_date, request.end_date).unwrap();
///
/// let result = match_sandwich_pattern(&request, &range, &NoSiblings, 1, 1);
/// assert_eq!(result.pattern, Some(SandwichPattern::FriSatSun));
/// ```
pub fn match_sandwich_pattern<S: SiblingProvider + ?Sized>(
    request: &LeaveRequest,
    range: &DayRange,
    siblings: &S,
    window_days: u32,
    step_number: u32,
) -> PatternMatch {
    let mut matcher = Matcher {
        request,
        range,
        siblings,
        window_days,
        next_step: step_number,
        audit_steps: Vec::new(),
        warnings: Vec::new(),
        notice: None,
        split_partner: None,
    };

    let pattern = SandwichPattern::PRIORITY_ORDER
        .into_iter()
        .find(|pattern| matcher.matches(*pattern));

    let split_partner = match pattern {
        Some(SandwichPattern::SplitFriMon) => matcher.split_partner.clone().flatten(),
        _ => None,
    };

    let reasoning = match (pattern, &split_partner) {
        (Some(SandwichPattern::SplitFriMon), Some(partner)) => format!(
            "Single {} leave pairs with sibling request {} to {} across the weekend",
            range.start_weekday(),
            partner.start_date,
            partner.end_date
        ),
        (Some(SandwichPattern::SingleAdvance), _) => format!(
            "Single {} leave filed in advance and approved",
            range.start_weekday()
        ),
        (Some(SandwichPattern::SingleSudden), _) => format!(
            "Single {} leave filed suddenly or not approved",
            range.start_weekday()
        ),
        (Some(p), _) => format!(
            "{} day range starting {} matches {} (priority {})",
            range.num_days(),
            range.start_weekday(),
            p,
            p.priority()
        ),
        (None, _) => format!(
            "{} day range starting {} bridges no weekend",
            range.num_days(),
            range.start_weekday()
        ),
    };

    let audit_step = AuditStep {
        step_number: matcher.next_step,
        rule_id: "sandwich_pattern_match".to_string(),
        rule_name: "Sandwich Pattern Match".to_string(),
        policy_ref: "patterns".to_string(),
        input: serde_json::json!({
            "start_date": range.start().to_string(),
            "end_date": range.end().to_string(),
            "calendar_days": range.num_days(),
            "approved": request.approved
        }),
        output: serde_json::json!({
            "pattern": pattern.map(|p| p.reason_code()).unwrap_or(ReasonCode::None),
            "priority": pattern.map(|p| p.priority())
        }),
        reasoning,
    };
    matcher.audit_steps.push(audit_step);

    PatternMatch {
        pattern,
        split_partner,
        notice: matcher.notice,
        audit_steps: matcher.audit_steps,
        warnings: matcher.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::expand_range;
    use chrono::NaiveDateTime;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn create_request(start: &str, end: &str, submitted: &str, approved: bool) -> LeaveRequest {
        LeaveRequest {
            id: "leave_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            is_half_day: false,
            submitted_at: make_datetime(submitted, "10:00:00"),
            approved,
        }
    }

    fn sibling(start: &str, end: &str, employee_id: Option<&str>) -> SiblingRequest {
        SiblingRequest {
            start_date: make_date(start),
            end_date: make_date(end),
            employee_id: employee_id.map(str::to_string),
        }
    }

    fn run<S: SiblingProvider + ?Sized>(request: &LeaveRequest, siblings: &S) -> PatternMatch {
        let range = expand_range(request.start_date, request.end_date).unwrap();
        match_sandwich_pattern(request, &range, siblings, 1, 1)
    }

    // ==========================================================================
    // Multi-day patterns
    // ==========================================================================
    #[test]
    fn test_fri_sat_sun() {
        let request = create_request("2025-09-26", "2025-09-28", "2025-09-20", true);
        assert_eq!(run(&request, &NoSiblings).pattern, Some(SandwichPattern::FriSatSun));
    }

    #[test]
    fn test_sat_sun_mon() {
        let request = create_request("2025-09-27", "2025-09-29", "2025-09-20", true);
        assert_eq!(run(&request, &NoSiblings).pattern, Some(SandwichPattern::SatSunMon));
    }

    #[test]
    fn test_fri_to_mon() {
        let request = create_request("2025-09-26", "2025-09-29", "2025-09-20", true);
        let result = run(&request, &NoSiblings);
        assert_eq!(result.pattern, Some(SandwichPattern::FriToMon));
        // No single-day rule evaluated, so no notice step
        assert!(result.notice.is_none());
        assert_eq!(result.audit_steps.len(), 1);
    }

    #[test]
    fn test_four_day_block_ignores_siblings() {
        let request = create_request("2025-09-26", "2025-09-29", "2025-09-26", false);
        let siblings = vec![sibling("2025-09-29", "2025-09-29", Some("emp_001"))];
        assert_eq!(run(&request, &siblings).pattern, Some(SandwichPattern::FriToMon));
    }

    #[test]
    fn test_thursday_to_sunday_is_not_a_pattern() {
        let request = create_request("2025-09-25", "2025-09-28", "2025-09-20", true);
        assert_eq!(run(&request, &NoSiblings).pattern, None);
    }

    #[test]
    fn test_friday_to_tuesday_is_not_a_pattern() {
        let request = create_request("2025-09-26", "2025-09-30", "2025-09-20", true);
        assert_eq!(run(&request, &NoSiblings).pattern, None);
    }

    #[test]
    fn test_mid_week_range_is_not_a_pattern() {
        let request = create_request("2025-09-30", "2025-10-02", "2025-09-20", true);
        let result = run(&request, &NoSiblings);
        assert_eq!(result.pattern, None);
        assert_eq!(result.audit_steps[0].output["pattern"], "NONE");
    }

    // ==========================================================================
    // Split Friday / Monday
    // ==========================================================================
    #[test]
    fn test_friday_with_sibling_monday_is_split() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![sibling("2025-09-29", "2025-09-29", Some("emp_001"))];
        let result = run(&request, &siblings);

        assert_eq!(result.pattern, Some(SandwichPattern::SplitFriMon));
        assert_eq!(result.split_partner.unwrap().start_date, make_date("2025-09-29"));
    }

    #[test]
    fn test_monday_with_sibling_friday_is_split() {
        let request = create_request("2025-09-29", "2025-09-29", "2025-09-20", true);
        let siblings = vec![sibling("2025-09-26", "2025-09-26", Some("emp_001"))];
        assert_eq!(run(&request, &siblings).pattern, Some(SandwichPattern::SplitFriMon));
    }

    #[test]
    fn test_sibling_range_covering_monday_is_split() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![sibling("2025-09-29", "2025-10-01", Some("emp_001"))];
        assert_eq!(run(&request, &siblings).pattern, Some(SandwichPattern::SplitFriMon));
    }

    #[test]
    fn test_sibling_from_other_employee_is_ignored() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![sibling("2025-09-29", "2025-09-29", Some("emp_999"))];
        assert_eq!(run(&request, &siblings).pattern, Some(SandwichPattern::SingleAdvance));
    }

    #[test]
    fn test_sibling_on_tuesday_is_not_split() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![sibling("2025-09-30", "2025-09-30", Some("emp_001"))];
        assert_eq!(run(&request, &siblings).pattern, Some(SandwichPattern::SingleAdvance));
    }

    #[test]
    fn test_sibling_next_week_monday_is_not_split() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![sibling("2025-10-06", "2025-10-06", Some("emp_001"))];
        assert_eq!(run(&request, &siblings).pattern, Some(SandwichPattern::SingleAdvance));
    }

    #[test]
    fn test_sibling_without_employee_id_warns_and_continues() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![sibling("2025-09-29", "2025-09-29", None)];
        let result = run(&request, &siblings);

        assert_eq!(result.pattern, Some(SandwichPattern::SingleAdvance));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "SIBLING_MISSING_EMPLOYEE_ID");
    }

    #[test]
    fn test_first_matching_sibling_wins() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let siblings = vec![
            sibling("2025-09-29", "2025-09-29", Some("emp_001")),
            sibling("2025-09-28", "2025-09-30", Some("emp_001")),
        ];
        let result = run(&request, &siblings);
        assert_eq!(result.split_partner.unwrap().end_date, make_date("2025-09-29"));
    }

    // ==========================================================================
    // Single Friday / Monday
    // ==========================================================================
    #[test]
    fn test_single_friday_advance_approved() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        let result = run(&request, &NoSiblings);
        assert_eq!(result.pattern, Some(SandwichPattern::SingleAdvance));
        assert_eq!(result.notice, Some(LeaveNotice::Advance));
        // Notice detection step followed by the match step
        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].rule_id, "sudden_leave_detection");
        assert_eq!(result.audit_steps[1].step_number, 2);
    }

    #[test]
    fn test_single_friday_same_day_is_sudden() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-26", true);
        assert_eq!(run(&request, &NoSiblings).pattern, Some(SandwichPattern::SingleSudden));
    }

    #[test]
    fn test_single_monday_unapproved_is_sudden() {
        let request = create_request("2025-09-29", "2025-09-29", "2025-09-20", false);
        let result = run(&request, &NoSiblings);
        assert_eq!(result.pattern, Some(SandwichPattern::SingleSudden));
        assert_eq!(result.notice, Some(LeaveNotice::Advance));
    }

    #[test]
    fn test_single_wednesday_is_not_a_pattern() {
        let request = create_request("2025-10-01", "2025-10-01", "2025-10-01", false);
        let result = run(&request, &NoSiblings);
        assert_eq!(result.pattern, None);
        assert!(result.notice.is_none());
    }

    #[test]
    fn test_single_saturday_is_not_a_pattern() {
        let request = create_request("2025-09-27", "2025-09-27", "2025-09-20", true);
        assert_eq!(run(&request, &NoSiblings).pattern, None);
    }

    // ==========================================================================
    // Helpers
    // ==========================================================================
    #[test]
    fn test_priority_order_is_ascending() {
        let priorities: Vec<u8> = SandwichPattern::PRIORITY_ORDER
            .iter()
            .map(|p| p.priority())
            .collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_only_single_day_patterns_support_half_day() {
        let supported: Vec<SandwichPattern> = SandwichPattern::PRIORITY_ORDER
            .into_iter()
            .filter(|p| p.supports_half_day())
            .collect();
        assert_eq!(
            supported,
            vec![SandwichPattern::SingleAdvance, SandwichPattern::SingleSudden]
        );
    }

    #[test]
    fn test_sibling_lookup_window() {
        let request = create_request("2025-09-26", "2025-09-26", "2025-09-20", true);
        assert_eq!(
            sibling_lookup_window(&request, 1),
            Some((make_date("2025-09-28"), make_date("2025-09-30")))
        );

        let multi_day = create_request("2025-09-26", "2025-09-29", "2025-09-20", true);
        assert_eq!(sibling_lookup_window(&multi_day, 1), None);

        let wednesday = create_request("2025-10-01", "2025-10-01", "2025-09-20", true);
        assert_eq!(sibling_lookup_window(&wednesday, 1), None);
    }

    #[test]
    fn test_slice_provider_filters_window_and_employee() {
        let siblings = vec![
            sibling("2025-09-29", "2025-09-29", Some("emp_001")),
            sibling("2025-09-29", "2025-09-29", Some("emp_002")),
            sibling("2025-09-29", "2025-09-29", None),
            sibling("2025-10-10", "2025-10-10", Some("emp_001")),
        ];
        let found = siblings.siblings_between(
            "emp_001",
            make_date("2025-09-28"),
            make_date("2025-09-30"),
        );
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_pattern_display_uses_reason_code() {
        assert_eq!(SandwichPattern::SplitFriMon.to_string(), "SPLIT_FRI_MON");
    }
}
