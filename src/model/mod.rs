//! Application domain model.
//!
//! This module contains pure settings state (no I/O) and configuration
//! constants. Persistence lives in `storage`.

pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{AppSettings, Geometry, Theme};
