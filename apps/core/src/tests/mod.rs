//! Test Module
//!
//! Test suite for the EclatChat assistant core.
//!
//! ## Test Categories
//! - `brain_tests`: normalization, intent detection, response contract
//! - `session_tests`: transcript ordering and append-only behavior

pub mod brain_tests;
