// SPDX-License-Identifier: CC0-1.0

//! Network selection
//!
//! The process runs on exactly one network, picked at startup. Every parameter
//! set is built on first use and lives until exit; this module remembers which
//! one is active.
//!
//! ```rust
//! use ::chainparams::{chainparams, Network};
//!
//! chainparams::select_params_from_str("test").unwrap();
//! assert_eq!(chainparams::params().network(), Network::Test);
//! assert_eq!(chainparams::params_for(Network::Main).default_port(), 17883);
//! ```
//!

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::consensus::checkpoints::{self, CheckpointData};
use crate::consensus::params::Params;
use crate::network::constants::{Network, ParseNetworkError};

static MAIN_PARAMS: Lazy<Params> = Lazy::new(Params::main);
static TEST_PARAMS: Lazy<Params> = Lazy::new(Params::testnet);
static REGTEST_PARAMS: Lazy<Params> = Lazy::new(Params::regtest);
static UNIT_TEST_PARAMS: Lazy<Params> = Lazy::new(Params::unit_test);

static CURRENT: RwLock<Option<&'static Params>> = RwLock::new(None);

/// The parameter set of `network`, built on first use. Does not change the
/// selection.
pub fn params_for(network: Network) -> &'static Params {
    match network {
        Network::Main => &*MAIN_PARAMS,
        Network::Test => &*TEST_PARAMS,
        Network::RegTest => &*REGTEST_PARAMS,
        Network::UnitTest => &*UNIT_TEST_PARAMS,
    }
}

/// The checkpoint table of `network`.
pub fn checkpoints_for(network: Network) -> &'static CheckpointData {
    checkpoints::checkpoints_for(network)
}

fn install(params: &'static Params) {
    // a panic while holding the lock cannot leave the slot half written
    let mut current = CURRENT.write().unwrap_or_else(|e| e.into_inner());
    match *current {
        Some(previous) if std::ptr::eq(previous, params) => {
            debug!("{} network already selected", params.network());
            return;
        }
        Some(previous) => warn!("switching network from {} to {}", previous.network(), params.network()),
        None => {}
    }
    info!("selected {} network", params.network());
    *current = Some(params);
}

/// Makes `network` the active network. Selecting the active network again
/// does nothing, selecting another one replaces it.
pub fn select_params(network: Network) {
    install(params_for(network));
}

/// Selects the network named by a `-chain` argument.
pub fn select_params_from_str(name: &str) -> Result<Network, ParseNetworkError> {
    let network: Network = name.parse()?;
    select_params(network);
    Ok(network)
}

/// Selects the network given by the `-testnet` and `-regtest` switches.
pub fn select_params_from_flags(testnet: bool, regtest: bool) -> Result<Network, ParseNetworkError> {
    let network = Network::from_flags(testnet, regtest)?;
    select_params(network);
    Ok(network)
}

/// Installs a modified unit test parameter set as the active one.
///
/// The set is leaked: it stays valid for every reference handed out by
/// [`params`] until the process exits.
///
/// # Panics
///
/// When `params` is not a unit test set.
pub fn select_unit_test_params(params: Params) -> &'static Params {
    assert_eq!(params.network(), Network::UnitTest, "only unit test parameters may be replaced");
    let leaked: &'static Params = Box::leak(Box::new(params));
    install(leaked);
    leaked
}

/// The active parameter set, or `None` before any selection.
pub fn try_params() -> Option<&'static Params> {
    *CURRENT.read().unwrap_or_else(|e| e.into_inner())
}

/// The active parameter set.
///
/// # Panics
///
/// When no network was selected yet: the node cannot operate without one.
pub fn params() -> &'static Params {
    match try_params() {
        Some(params) => params,
        None => panic!("chain parameters read before a network was selected"),
    }
}
