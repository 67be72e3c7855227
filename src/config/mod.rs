//! Configuration loading and management for the Sandwich-Leave Deduction Engine.
//!
//! This module provides functionality to load the leave policy from YAML files,
//! including the sandwich penalties and the holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_HALF_DAY_FRACTION, DEFAULT_MAX_RANGE_DAYS, HolidaysFile, LeavePolicyConfig, PolicyFile, PolicyMetadata,
    SandwichPenalties, SandwichPolicy,
};
