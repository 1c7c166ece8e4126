//! Tests for the `ResilientCodable` derive
//!
//! Analysis tests cover field extraction and the diagnostics; expansion
//! tests compare the generated token streams against expected impls.

mod analyze_tests;
