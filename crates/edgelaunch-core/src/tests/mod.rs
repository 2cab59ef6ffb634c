//! Test module for edgelaunch-core
//!
//! This module contains tests for:
//! - Touch ownership between the edge strip and the launcher surface
//! - Coordinate translation between overlay windows
//! - Strip and surface geometry
//! - Entry loading, the open/close bracket and overflow folders
//! - Gesture interpretation inside the launcher
//! - Start-action dispatch and persisted pause state
//! - Configuration loading and defaults

// Test modules use exact float comparisons and test-specific casts
#![allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

mod fixtures;
mod geometry_tests;
mod translate_tests;
