//! Team calendar events and day queries.
//!
//! Events carry UTC timestamps; the month and day views work in calendar
//! days, so a multi-day event shows up on every day it covers. The day
//! math lives in [`schedule`] as pure functions; [`CalendarContext`]
//! persists the event list as one collection.

pub mod context;
pub mod error;
pub mod schedule;
pub mod types;

pub use context::*;
pub use error::*;
pub use schedule::*;
pub use types::*;
