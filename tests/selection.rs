// SPDX-License-Identifier: CC0-1.0

use chainparams::chainparams;
use ::chainparams::{Network, ParseNetworkError};

// One test function: the selection is shared by every test in this binary.
#[test]
fn select_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();

    for network in Network::ALL.iter() {
        chainparams::select_params(*network);
        assert_eq!(chainparams::params().network(), *network);
        assert!(std::ptr::eq(chainparams::params(), chainparams::params_for(*network)));
    }

    // idempotent
    chainparams::select_params(Network::RegTest);
    chainparams::select_params(Network::RegTest);
    assert_eq!(chainparams::params().default_port(), 36210);

    // params_for leaves the selection alone
    assert_eq!(chainparams::params_for(Network::Main).default_port(), 17883);
    assert_eq!(chainparams::params().network(), Network::RegTest);

    // configuration input
    assert_eq!(chainparams::select_params_from_str("test"), Ok(Network::Test));
    assert_eq!(chainparams::params().network(), Network::Test);
    assert_eq!(
        chainparams::select_params_from_str("fakenet"),
        Err(ParseNetworkError::Unknown("fakenet".to_owned()))
    );
    assert_eq!(chainparams::params().network(), Network::Test);

    assert_eq!(chainparams::select_params_from_flags(false, false), Ok(Network::Main));
    assert_eq!(chainparams::select_params_from_flags(true, true), Err(ParseNetworkError::ConflictingFlags));
    assert_eq!(chainparams::params().network(), Network::Main);
    assert_eq!(chainparams::select_params_from_flags(false, true), Ok(Network::RegTest));

    // modified unit test set
    let mut unit = chainparams::params_for(Network::UnitTest).clone();
    unit.set_subsidy_halving_interval(100);
    unit.set_skip_proof_of_work_check(true);
    let installed = chainparams::select_unit_test_params(unit);
    assert!(std::ptr::eq(chainparams::params(), installed));
    assert_eq!(chainparams::params().subsidy_halving_interval(), 100);
    assert!(chainparams::params().skip_proof_of_work_check());
    // the shared unit test set is untouched
    assert_eq!(chainparams::params_for(Network::UnitTest).subsidy_halving_interval(), 4_000_000);

    chainparams::select_params(Network::UnitTest);
    assert!(std::ptr::eq(chainparams::params(), chainparams::params_for(Network::UnitTest)));
    assert!(!chainparams::params().skip_proof_of_work_check());
}
