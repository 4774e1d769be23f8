// SPDX-License-Identifier: CC0-1.0

//! Consensus
//!
//! This module defines structures, functions, and traits which are needed to
//! conform to the consensus rules of a WMP network: the consensus encoding
//! used for hashing, the per-network parameter sets and their checkpoints.
//!

pub mod checkpoints;
pub mod encode;
pub mod params;

pub use self::encode::{serialize, serialize_hex, Encodable};
pub use self::params::Params;
