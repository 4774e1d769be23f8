// SPDX-License-Identifier: CC0-1.0

//! Utility functions
//!
//! Functions needed by all parts of the library: monetary amounts and the
//! zerocoin parameter cache.
//!

pub mod amount;
pub mod zerocoin;
