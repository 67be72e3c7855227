//! Sandwich-Leave Deduction Engine
//!
//! This crate converts a requested leave date range into the number of days to
//! deduct from an employee's balance, enforcing the sandwich-leave rules that
//! stop short leaves from being stretched across weekends and holidays.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
