//! # annum-progress
//!
//! Pure year-progress model for the annum widget: one marker per day of the
//! year, classified relative to today, plus days-left and percent-complete
//! statistics.
//!
//! The model is a pure function of a validated [`annum_calendar::DayOfYear`];
//! rendering it to a surface is the binary's job.
//!
//! ## Quick Start
//!
//! ```
//! use annum_calendar::DayOfYear;
//! use annum_progress::{DayState, GridModel};
//!
//! let today = DayOfYear::from_ymd(2024, 1, 1).unwrap();
//! let model = GridModel::compute(today);
//!
//! assert_eq!(model.markers().len(), 366);
//! assert_eq!(model.markers()[0].state(), DayState::Current);
//! assert_eq!(model.progress().days_left(), 365);
//! assert_eq!(model.progress().percent_label(), "0.3%");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `marker` | Per-day markers and their classification |
//! | `stats` | Days-left and percent-complete statistics |
//! | `model` | The grid model combining both |

mod marker;
mod model;
mod stats;

pub use marker::{DayMarker, DayState};
pub use model::GridModel;
pub use stats::YearProgress;
