//! distrover - Linux distribution release finder library
//!
//! For a package such as glibc, this library finds, per distribution, the
//! oldest release that ships at least a required package version and the
//! newest release that falls short:
//! - Fetching distribution comparison tables (DistroWatch)
//! - Extracting the package's release history
//! - Locating the boundary between working and not working releases

pub mod boundary;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod source;
