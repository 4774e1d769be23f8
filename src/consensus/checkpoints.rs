// SPDX-License-Identifier: CC0-1.0

//! Checkpoints
//!
//! Block hashes hard coded at fixed heights. A chain that disagrees with a
//! checkpoint is rejected, which bounds how deep a reorganization can reach.
//! The tables also carry the transaction counts needed to estimate
//! synchronization progress.
//!

use std::collections::BTreeMap;

use hashes::hex::FromHex;
use once_cell::sync::Lazy;

use crate::blockdata::block::BlockHash;
use crate::consensus::params::GENESIS_HASH;
use crate::network::constants::Network;

/// Weight of a transaction verified after the last checkpoint, when
/// signatures are checked, relative to one before it.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

static MAIN_CHECKPOINTS: Lazy<CheckpointData> = Lazy::new(|| {
    CheckpointData::new(
        &[
            (0, GENESIS_HASH),
            (4, "00000bd6fdd8c3f9415f34b3d0dfd7be30151c6ff83b21134bc4e27bebf859a4"),
        ],
        1563244004, // UNIX timestamp of last checkpoint block
        5,          // total number of transactions between genesis and last checkpoint
        3000,       // estimated number of transactions per day after checkpoint
    )
});

static TEST_CHECKPOINTS: Lazy<CheckpointData> =
    Lazy::new(|| CheckpointData::new(&[(0, GENESIS_HASH)], 1563220800, 0, 250));

static REGTEST_CHECKPOINTS: Lazy<CheckpointData> =
    Lazy::new(|| CheckpointData::new(&[(0, GENESIS_HASH)], 1563220800, 0, 100));

/// A network's checkpoint table and the chain statistics at its last entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, BlockHash>,
    time_last_checkpoint: i64,
    transactions_last_checkpoint: u64,
    transactions_per_day: f64,
}

impl CheckpointData {
    /// Builds a table from `(height, hex hash)` pairs.
    ///
    /// # Panics
    ///
    /// When the table is empty, heights are not strictly increasing or a hash
    /// is not hex: tables are embedded constants.
    pub fn new(
        entries: &[(u32, &str)],
        time_last_checkpoint: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: u64,
    ) -> CheckpointData {
        assert!(!entries.is_empty(), "checkpoint table is empty");
        assert!(
            entries.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "checkpoint heights are not strictly increasing"
        );

        let checkpoints: BTreeMap<u32, BlockHash> = entries
            .iter()
            .map(|&(height, hash)| {
                (height, BlockHash::from_hex(hash).expect("checkpoint hash is hex"))
            })
            .collect();
        debug!(
            "built checkpoint table: {} entries, last at {}",
            checkpoints.len(),
            entries[entries.len() - 1].0
        );

        CheckpointData {
            checkpoints,
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day: transactions_per_day as f64,
        }
    }

    /// Hash checkpointed at `height`, if any.
    pub fn get(&self, height: u32) -> Option<BlockHash> {
        self.checkpoints.get(&height).copied()
    }

    /// Iterates over `(height, hash)` pairs by increasing height.
    pub fn iter(&self) -> impl Iterator<Item = (u32, BlockHash)> + '_ {
        self.checkpoints.iter().map(|(&height, &hash)| (height, hash))
    }

    /// Timestamp of the last checkpointed block.
    pub fn time_last_checkpoint(&self) -> i64 {
        self.time_last_checkpoint
    }

    /// Transactions from genesis up to the last checkpoint.
    pub fn transactions_last_checkpoint(&self) -> u64 {
        self.transactions_last_checkpoint
    }

    /// Estimated transactions per day after the last checkpoint.
    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }

    /// Whether `height` is at or below the last checkpoint.
    pub fn is_within_checkpoint_range(&self, height: u32) -> bool {
        height <= self.total_blocks_estimate()
    }

    /// Checks a block against the table. Only a checkpoint at `height` with
    /// a different hash fails.
    pub fn check_block(&self, height: u32, hash: &BlockHash) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Height of the last checkpoint.
    pub fn total_blocks_estimate(&self) -> u32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// The highest checkpoint whose block is known to the caller.
    pub fn last_known_checkpoint<F>(&self, mut is_known: F) -> Option<(u32, BlockHash)>
    where
        F: FnMut(&BlockHash) -> bool,
    {
        self.checkpoints
            .iter()
            .rev()
            .find(|&(_, hash)| is_known(hash))
            .map(|(&height, &hash)| (height, hash))
    }

    /// Guesses how far verification has progressed, between 0.0 and 1.0.
    ///
    /// `chain_tx` is the number of transactions up to the tip, `block_time`
    /// the tip's timestamp. Work after the last checkpoint counts
    /// [`SIGCHECK_VERIFICATION_FACTOR`] times when signatures are checked.
    pub fn guess_verification_progress(&self, chain_tx: u64, block_time: i64, now: i64, sigchecks: bool) -> f64 {
        let factor = if sigchecks { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };
        let last_tx = self.transactions_last_checkpoint as f64;
        let chain = chain_tx as f64;
        // a clock behind the checkpoint or the tip expects no further work
        let days_since = |time: i64| (now - time).max(0) as f64 / SECONDS_PER_DAY;

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_after = last_tx - chain;
            let expensive_after = days_since(self.time_last_checkpoint) * self.transactions_per_day;
            (chain, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = last_tx;
            let expensive_before = chain - last_tx;
            let expensive_after = days_since(block_time) * self.transactions_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).min(1.0).max(0.0)
    }
}

/// The checkpoint table of `network`. The unit test network shares main's.
pub fn checkpoints_for(network: Network) -> &'static CheckpointData {
    match network {
        Network::Main | Network::UnitTest => &*MAIN_CHECKPOINTS,
        Network::Test => &*TEST_CHECKPOINTS,
        Network::RegTest => &*REGTEST_CHECKPOINTS,
    }
}

#[cfg(test)]
mod tests {
    use hashes::Hash;

    use super::*;
    use crate::consensus::params::Params;

    fn hash(byte: u8) -> BlockHash {
        BlockHash::from_inner([byte; 32])
    }

    #[test]
    fn main_table() {
        let main = checkpoints_for(Network::Main);
        assert_eq!(format!("{:x}", main.get(0).unwrap()), GENESIS_HASH);
        assert_eq!(
            format!("{:x}", main.get(4).unwrap()),
            "00000bd6fdd8c3f9415f34b3d0dfd7be30151c6ff83b21134bc4e27bebf859a4"
        );
        assert_eq!(main.get(1), None);
        assert_eq!(main.total_blocks_estimate(), 4);
        assert_eq!(main.time_last_checkpoint(), 1563244004);
        assert_eq!(main.transactions_last_checkpoint(), 5);

        let heights: Vec<u32> = main.iter().map(|(h, _)| h).collect();
        assert_eq!(heights, vec![0, 4]);

        assert!(std::ptr::eq(main, checkpoints_for(Network::UnitTest)));
        assert_eq!(checkpoints_for(Network::Test).total_blocks_estimate(), 0);
        assert_eq!(checkpoints_for(Network::RegTest).transactions_per_day(), 100.0);
    }

    #[test]
    fn every_network_anchors_at_genesis() {
        for network in Network::ALL.iter() {
            let data = checkpoints_for(*network);
            assert_eq!(data.get(0), Some(Params::new(*network).genesis_hash()), "{}", network);

            let heights: Vec<u32> = data.iter().map(|(h, _)| h).collect();
            assert_eq!(heights[0], 0);
            assert!(heights.windows(2).all(|pair| pair[0] < pair[1]), "{}", network);
            assert_eq!(data.total_blocks_estimate(), heights[heights.len() - 1]);
        }
    }

    #[test]
    fn checkpoint_range_and_check() {
        let main = checkpoints_for(Network::Main);
        assert!(main.is_within_checkpoint_range(0));
        assert!(main.is_within_checkpoint_range(4));
        assert!(!main.is_within_checkpoint_range(5));

        let at_4 = main.get(4).unwrap();
        assert!(main.check_block(4, &at_4));
        assert!(!main.check_block(4, &hash(1)));
        assert!(main.check_block(3, &hash(1)));
    }

    #[test]
    fn last_known() {
        let data = CheckpointData::new(
            &[
                (0, "0000000000000000000000000000000000000000000000000000000000000001"),
                (10, "0000000000000000000000000000000000000000000000000000000000000002"),
                (20, "0000000000000000000000000000000000000000000000000000000000000003"),
            ],
            0,
            0,
            1,
        );
        let known = [data.get(0).unwrap(), data.get(10).unwrap()];
        assert_eq!(data.last_known_checkpoint(|h| known.contains(h)), Some((10, known[1])));
        assert_eq!(data.last_known_checkpoint(|_| false), None);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn unordered_heights() {
        CheckpointData::new(&[(5, GENESIS_HASH), (5, GENESIS_HASH)], 0, 0, 1);
    }

    #[test]
    fn verification_progress() {
        let data = CheckpointData::new(&[(0, GENESIS_HASH)], 1_000_000, 1000, 86400);
        let day = 86400;

        // at the checkpoint, one day later: 1000 done vs 86400 * 5 expected
        let p = data.guess_verification_progress(1000, 1_000_000, 1_000_000 + day, true);
        assert!((p - 1000.0 / (1000.0 + 432_000.0)).abs() < 1e-12);

        // halfway to the checkpoint, no time elapsed
        let p = data.guess_verification_progress(500, 0, 1_000_000, true);
        assert!((p - 0.5).abs() < 1e-12);

        // past the checkpoint and caught up
        let p = data.guess_verification_progress(2000, 5_000_000, 5_000_000, true);
        assert!((p - 1.0).abs() < 1e-12);

        // signature checks off weighs everything the same
        let p = data.guess_verification_progress(2000, 5_000_000, 5_000_000 + day, false);
        assert!((p - 2000.0 / (2000.0 + 86400.0)).abs() < 1e-12);
    }

    #[test]
    fn verification_progress_with_clock_behind() {
        let data = CheckpointData::new(&[(0, GENESIS_HASH)], 1_000_000, 1000, 86400);

        // before the checkpoint, clock behind the checkpoint time
        let p = data.guess_verification_progress(1000, 1_000_000, 1_000_000 - 86400, true);
        assert_eq!(p, 1.0);
        let p = data.guess_verification_progress(500, 0, 0, true);
        assert!((p - 0.5).abs() < 1e-12);

        // past the checkpoint, clock behind the tip
        let p = data.guess_verification_progress(2000, 5_000_000, 4_000_000, true);
        assert_eq!(p, 1.0);
        let p = data.guess_verification_progress(2000, 5_000_000, 4_000_000, false);
        assert_eq!(p, 1.0);
    }
}
