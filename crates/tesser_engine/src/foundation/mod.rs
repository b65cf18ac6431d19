//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and homogeneous transform helpers
//! - Handle types for arena-owned objects
//! - Logging setup

pub mod math;
pub mod collections;
pub mod logging;
