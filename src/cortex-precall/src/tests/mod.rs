//! Tests for the pre-call pipeline.

mod error_tests;
