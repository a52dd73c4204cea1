#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Error and result types reported by fallible table operations.
///
/// This module provides the crate-wide [`Error`](error::Error) enum and
/// [`Result`](error::Result) alias; allocation failures surface here instead
/// of aborting.
pub mod error;

pub mod hash_table;

/// The primality test and next-prime search used to size the table.
///
/// This module provides the [`Primality`](primes::Primality) classification
/// together with the [`primality`](primes::primality) and
/// [`next_prime`](primes::next_prime) functions that keep every bucket-array
/// length prime.
pub mod primes;

pub use error::Error;
pub use error::Result;
pub use hash_table::Drain;
pub use hash_table::HashTable;
pub use hash_table::Iter;
#[cfg(feature = "stats")]
pub use hash_table::TableStats;
pub use primes::Primality;
pub use primes::next_prime;
pub use primes::primality;
