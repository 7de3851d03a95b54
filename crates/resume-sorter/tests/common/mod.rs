//! Shared test utilities for resume-sorter integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated test execution with temp directories
//! - Builders for in-memory PDF and DOCX fixtures and model artifacts

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
