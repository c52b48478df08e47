//! # Integration Tests
//!
//! End-to-end authorization flows over the full adapter stack.
