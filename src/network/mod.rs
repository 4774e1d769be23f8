// SPDX-License-Identifier: CC0-1.0

//! Network support
//!
//! This module defines the network identifiers, the peer address records
//! handed to the address manager, and the fixed seed tables used to bootstrap
//! peer discovery.
//!

pub mod address;
pub mod constants;
pub mod seeds;
