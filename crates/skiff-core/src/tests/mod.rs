//! Engine test suite.

mod fixtures;

mod overlay_tests;
