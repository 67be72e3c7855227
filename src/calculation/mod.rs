//! Calculation logic for the Sandwich-Leave Deduction Engine.
//!
//! This module contains the functions that turn a leave request into a
//! deduction: calendar day classification, inclusive range expansion,
//! working-day counting, sudden-leave detection, sandwich pattern matching
//! against sibling applications, and the deduction calculator that composes
//! them.

mod day_classifier;
mod day_range;
mod deduction;
mod sandwich_pattern;
mod sudden_leave;
mod working_days;

pub use day_classifier::{DayClassification, classify, is_weekend};
pub use day_range::{DayRange, Days, classify_range, expand_range};
pub use deduction::{compute_batch, compute_deduction};
pub use sandwich_pattern::{
    NoSiblings, PatternMatch, SandwichPattern, SiblingProvider, adjacent_bridge_day,
    match_sandwich_pattern, sibling_lookup_window,
};
pub use sudden_leave::{LeaveNotice, NoticeDetection, detect_sudden_leave, is_sudden};
pub use working_days::{WorkingDayCount, count_working_days};
