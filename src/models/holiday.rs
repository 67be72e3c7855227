//! Holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] entry and the [`HolidayCalendar`]
//! lookup used to classify dates during a deduction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar holiday.
///
/// Mandatory holidays (`is_optional == false`) are excluded from working-day
/// counts. Optional holidays appear on the calendar but are charged like
/// ordinary days.
///
/// # Example
///
/// ```
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
///     name: "Gandhi Jayanti".to_string(),
///     is_optional: false,
/// };
/// assert!(holiday.is_mandatory());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
    /// Whether employees may choose to work on this holiday.
    #[serde(default)]
    pub is_optional: bool,
}

impl Holiday {
    /// Returns true if the holiday exempts the day from deduction.
    pub fn is_mandatory(&self) -> bool {
        !self.is_optional
    }
}

/// Date-keyed holiday lookup.
///
/// Holds at most one holiday per date. When the source list contains several
/// entries for the same date the first one wins and the later ones are kept
/// aside as duplicates so the caller can report them.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let calendar = HolidayCalendar::new(vec![
///     Holiday { date, name: "Foundation Day".to_string(), is_optional: false },
///     Holiday { date, name: "Foundation Day (copy)".to_string(), is_optional: true },
/// ]);
///
/// assert!(calendar.is_mandatory_holiday(date));
/// assert_eq!(calendar.duplicates().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
    duplicates: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays, first occurrence per date wins.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut calendar = HolidayCalendar::default();
        for holiday in holidays {
            calendar.insert(holiday);
        }
        calendar
    }

    /// Adds a holiday unless its date is already taken.
    ///
    /// Returns `false` when the holiday was recorded as a duplicate instead.
    pub fn insert(&mut self, holiday: Holiday) -> bool {
        if self.holidays.contains_key(&holiday.date) {
            self.duplicates.push(holiday);
            return false;
        }
        self.holidays.insert(holiday.date, holiday);
        true
    }

    /// Looks up the holiday on a date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Checks if the date carries a mandatory (non-optional) holiday.
    pub fn is_mandatory_holiday(&self, date: NaiveDate) -> bool {
        self.get(date).is_some_and(Holiday::is_mandatory)
    }

    /// Entries that were dropped because their date was already present.
    pub fn duplicates(&self) -> &[Holiday] {
        &self.duplicates
    }

    /// Iterates holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Iterates holidays falling within `[from, to]`, in date order.
    ///
    /// Yields nothing when `from > to`.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = &Holiday> {
        let bounds = (from <= to).then_some(from..=to);
        bounds
            .into_iter()
            .flat_map(move |bounds| self.holidays.range(bounds).map(|(_, holiday)| holiday))
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl FromIterator<Holiday> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        HolidayCalendar::new(iter)
    }
}

impl Extend<Holiday> for HolidayCalendar {
    fn extend<I: IntoIterator<Item = Holiday>>(&mut self, iter: I) {
        for holiday in iter {
            self.insert(holiday);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holiday(date: &str, name: &str, is_optional: bool) -> Holiday {
        Holiday {
            date: make_date(date),
            name: name.to_string(),
            is_optional,
        }
    }

    #[test]
    fn test_mandatory_holiday_is_detected() {
        let calendar = HolidayCalendar::new(vec![holiday("2025-10-01", "Foundation Day", false)]);
        assert!(calendar.is_mandatory_holiday(make_date("2025-10-01")));
    }

    #[test]
    fn test_optional_holiday_is_not_mandatory() {
        let calendar = HolidayCalendar::new(vec![holiday("2025-10-01", "Regional Fair", true)]);
        assert!(!calendar.is_mandatory_holiday(make_date("2025-10-01")));
        assert_eq!(calendar.get(make_date("2025-10-01")).unwrap().name, "Regional Fair");
    }

    #[test]
    fn test_non_holiday_date() {
        let calendar = HolidayCalendar::new(vec![holiday("2025-10-01", "Foundation Day", false)]);
        assert!(!calendar.is_mandatory_holiday(make_date("2025-10-02")));
        assert!(calendar.get(make_date("2025-10-02")).is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let calendar = HolidayCalendar::new(vec![
            holiday("2025-10-01", "First", true),
            holiday("2025-10-01", "Second", false),
        ]);

        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.get(make_date("2025-10-01")).unwrap().name, "First");
        assert!(!calendar.is_mandatory_holiday(make_date("2025-10-01")));
        assert_eq!(calendar.duplicates().len(), 1);
        assert_eq!(calendar.duplicates()[0].name, "Second");
    }

    #[test]
    fn test_iter_is_date_ordered() {
        let calendar: HolidayCalendar = vec![
            holiday("2025-12-25", "Christmas Day", false),
            holiday("2025-08-15", "Independence Day", false),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = calendar.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Independence Day", "Christmas Day"]);
    }

    #[test]
    fn test_between_is_inclusive() {
        let calendar = HolidayCalendar::new(vec![
            holiday("2025-08-15", "Independence Day", false),
            holiday("2025-10-02", "Gandhi Jayanti", false),
            holiday("2025-12-25", "Christmas Day", false),
        ]);

        let names: Vec<&str> = calendar
            .between(make_date("2025-08-15"), make_date("2025-10-02"))
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, vec!["Independence Day", "Gandhi Jayanti"]);

        // Inverted bounds yield nothing rather than panicking
        assert_eq!(
            calendar
                .between(make_date("2025-12-31"), make_date("2025-01-01"))
                .count(),
            0
        );
    }

    #[test]
    fn test_extend_records_duplicates() {
        let mut calendar = HolidayCalendar::default();
        assert!(calendar.is_empty());
        calendar.extend(vec![
            holiday("2025-08-15", "Independence Day", false),
            holiday("2025-08-15", "Independence Day", false),
        ]);
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.duplicates().len(), 1);
    }

    #[test]
    fn test_deserialize_holiday_defaults_to_mandatory() {
        let json = r#"{"date": "2025-12-25", "name": "Christmas Day"}"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert!(!holiday.is_optional);
        assert!(holiday.is_mandatory());
    }
}
