// SPDX-License-Identifier: CC0-1.0

//! # WMP chain parameters
//!
//! This library holds the fixed consensus parameters of every WMP network
//! (main, test, regtest and the in-process unit test network), the
//! checkpoints guarding each chain against deep reorganizations, the
//! bootstrap seed tables used for peer discovery and the zerocoin
//! accumulator parameters derived from the trusted RSA modulus.
//!
//! A node picks its network once at startup with
//! [`chainparams::select_params`] and reads the active set through
//! [`chainparams::params`] for the rest of its lifetime.
//!
//! ```rust
//! use ::chainparams::{chainparams, Network};
//!
//! chainparams::select_params(Network::RegTest);
//! assert_eq!(chainparams::params().default_port(), 36210);
//! ```
//!

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![warn(missing_docs)]

// Re-exported dependencies.
pub extern crate bitcoin_hashes as hashes;
pub extern crate rug;
pub extern crate secp256k1;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;

#[macro_use]
mod internal_macros;
pub mod blockdata;
pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod network;
pub mod util;

pub use crate::blockdata::block::{Block, BlockHash, BlockHeader, HeaderHasher, QuarkHasher, TxMerkleNode};
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut, Txid};
pub use crate::consensus::checkpoints::CheckpointData;
pub use crate::consensus::encode::VarInt;
pub use crate::consensus::params::{Base58Type, Params};
pub use crate::network::address::Address;
pub use crate::network::constants::{Network, ParseNetworkError, ServiceFlags};
pub use crate::network::seeds::SeedSpec6;
pub use crate::util::amount::Amount;
pub use crate::util::zerocoin::ZerocoinParams;
