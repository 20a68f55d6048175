//! Test Module
//!
//! Cross-module test suite for the prompt refiner.
//!
//! ## Test Categories
//! - `analysis_tests`: classification properties and the worked examples
//! - `composer_tests`: composition layout, counting and determinism
//! - `source_tests`: remote source against a mock HTTP server, fallback behavior
//! - `wizard_tests`: state machine transitions and full sessions

pub mod composer_tests;
