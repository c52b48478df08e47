//! # DappAuth Authenticator Benchmarks
//!
//! | Path     | Dominant cost                         |
//! |----------|---------------------------------------|
//! | EOA      | one secp256k1 public-key recovery     |
//! | Contract | one `isValidSignature` call per blob  |

use criterion::{criterion_group, criterion_main, Criterion};

fn authenticator_benchmarks(c: &mut Criterion) {
    dappauth_tests::benchmarks::authenticator::register_benchmarks(c);
}

criterion_group!(benches, authenticator_benchmarks);
criterion_main!(benches);
