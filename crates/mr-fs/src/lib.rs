//! File access for marker replacement
//!
//! Loads files into memory, writes them back atomically, and reads marker
//! syntax configuration.

pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
