//! Environment-driven run profiles shared by test suites.

pub mod property_test_profile;
