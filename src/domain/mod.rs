//! Core domain models for distrover
//!
//! This module contains the fundamental types used throughout the application:
//! - Dot-numeric version tuples and the numeric prefix sniff
//! - Release history extracted from a comparison page
//! - Boundary and per-distribution report structures

mod history;
mod report;
mod version;

pub use history::{DistroHistory, HistoryEntry};
pub use report::{Boundary, DistroReport, PreviousRelease, NO_EARLIER_RELEASE};
pub use version::{looks_numeric, parse_version, VersionParseError, VersionTuple};
