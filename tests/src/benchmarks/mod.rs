//! # DappAuth Benchmarks
//!
//! Authorization cost per verification path.
