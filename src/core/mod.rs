//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Input resolution (inline text, file, stdin)
//! - Logging setup

pub mod input;
pub mod logging;
pub mod model;
pub mod render;
