//! Tests for cortex-precall-types.

mod request_tests;
