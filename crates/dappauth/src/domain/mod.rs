//! # Domain Layer
//!
//! Pure hashing, decoding and key-recovery logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod codec;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod hashing;
