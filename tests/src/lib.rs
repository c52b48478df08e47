//! # DappAuth Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Key generation and challenge signing
//! ├── benchmarks/       # Authenticator throughput per path
//! └── integration/      # End-to-end flows over the ERC-1271 ABI
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dappauth-tests
//!
//! # Benchmarks
//! cargo bench -p dappauth-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
