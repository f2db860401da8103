//! Test fixtures for tsp-planner.
//!
//! Provides realistic test data including:
//! - Seven east-coast towns with real driving distances
//! - Helpers for the owned name/row forms the builder takes

pub mod east_coast;

pub use east_coast::*;
