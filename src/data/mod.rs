//! Engine data model and algorithms: axis ranges, tick generation,
//! coordinate mapping, label formatting, and gesture routing.
//!
//! Nothing in this module depends on egui or any rendering state; the UI
//! layer passes in snapshots and pixel extents and receives values back.

pub mod axis;
pub mod formatter;
pub mod gesture;
pub mod mapper;
pub mod spectrum;
pub mod ticks;
