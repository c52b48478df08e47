//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod erc1271;
pub mod memory;
