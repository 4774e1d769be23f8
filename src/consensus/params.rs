// SPDX-License-Identifier: CC0-1.0

//! Consensus parameters
//!
//! This module provides the predefined parameter set of every WMP network.
//!
//! Main is the baseline and defines every field. The other networks are built
//! from it by struct update, each overriding only what differs:
//!
//! ```text
//! Main ──> Test ──> RegTest
//!   └────> UnitTest
//! ```
//!
//! Only the unit test set is mutable, see [`Params::set_subsidy_halving_interval`]
//! and the other setters.
//!

use std::time::{SystemTime, UNIX_EPOCH};

use hashes::hex::FromHex;
use rug::Integer;

use crate::blockdata::block::{self, Block, BlockHash, HeaderHasher};
use crate::blockdata::constants::genesis_block;
use crate::consensus::checkpoints::{self, CheckpointData};
use crate::network::address::Address;
use crate::network::constants::Network;
use crate::network::seeds::{self, SeedSpec6};
use crate::util::amount::Amount;
use crate::util::zerocoin::{self, ZerocoinParams};

/// Hash of the genesis block shared by every network.
pub const GENESIS_HASH: &str = "00000fc943e8ee9a08115f3180e7a2d4eb250276f5d4c29f8e09e0a0a5499319";
/// Merkle root of the genesis block shared by every network.
pub const GENESIS_MERKLE_ROOT: &str = "a3deea737fbc22e13807e64d3a8e54fe6f7a15a0c41d0fa2c70eb208c8f0c411";
/// Genesis block time.
pub const GENESIS_TIME: u32 = 1563220800;
/// Genesis block difficulty bits.
pub const GENESIS_BITS: u32 = 0x1e0ffff0;
/// Genesis block nonce.
pub const GENESIS_NONCE: u32 = 667381;
/// Quark hash of the genesis header. The network knows the block by
/// [`GENESIS_HASH`]; this digest pins the header fields it is built from.
pub const GENESIS_HEADER_DIGEST: &str = "60dbb7b841270fce3171a9e5f60e34b29d153c46c0a7d3623b111e0f79b29162";

// RSA-2048 challenge number, nobody knows its factorization.
const ZEROCOIN_MODULUS: &str = concat!(
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784",
    "4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911",
    "6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363",
    "7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133",
    "8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548",
    "31438167899885040445364023527381951378636564391212010397122822120720357"
);

/// A DNS seed: a display name and the host to resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnsSeed {
    /// Seed name
    pub name: &'static str,
    /// Host name or address to query
    pub host: &'static str,
}

impl DnsSeed {
    const fn same(host: &'static str) -> DnsSeed {
        DnsSeed { name: host, host }
    }
}

const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::same("167.86.104.232"),
    DnsSeed::same("167.86.125.202"),
    DnsSeed::same("45.32.145.142"),
    DnsSeed::same("95.179.200.213"),
    DnsSeed::same("45.63.10.156"),
    DnsSeed::same("144.202.53.246"),
    DnsSeed::same("104.207.130.217"),
    DnsSeed::same("45.77.5.22"),
    DnsSeed::same("5.189.161.64"),
    DnsSeed::same("173.249.8.46"),
];

const TEST_DNS_SEEDS: &[DnsSeed] = &[DnsSeed::same("testnet.watchdog.expert")];

/// Kinds of base58 encoded data, each with its own version prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay to public key hash address
    PubkeyAddress,
    /// Pay to script hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
    /// BIP44 coin type
    ExtCoinType,
}

/// Version prefixes for each [`Base58Type`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Base58Prefixes {
    pubkey_address: &'static [u8],
    script_address: &'static [u8],
    secret_key: &'static [u8],
    ext_public_key: &'static [u8],
    ext_secret_key: &'static [u8],
    ext_coin_type: &'static [u8],
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    network: Network,

    // Protocol framing
    message_start: [u8; 4],
    default_port: u16,
    alert_key: &'static str,

    // Consensus thresholds
    pow_limit: Integer,
    subsidy_halving_interval: u32,
    max_reorganization_depth: u32,
    enforce_block_upgrade_majority: u32,
    reject_block_outdated_majority: u32,
    to_check_block_upgrade_majority: u32,
    miner_threads: u32,
    target_timespan: i64,
    target_spacing: i64,
    maturity: u32,
    masternode_count_drift: u32,
    max_money_out: Amount,

    // Height and time based activations
    last_pow_block: u32,
    modifier_update_block: u32,
    zerocoin_start_height: u32,
    zerocoin_start_time: i64,
    accumulator_start_height: u32,
    block_enforce_serial_range: u32,
    block_recalculate_accumulators: i32,
    block_first_fraudulent: i32,
    block_last_good_checkpoint: i32,

    base58_prefixes: Base58Prefixes,

    genesis: Block,
    genesis_hash: BlockHash,

    dns_seeds: &'static [DnsSeed],
    seed_table: &'static [SeedSpec6],

    // Policy flags
    require_rpc_password: bool,
    mining_requires_peers: bool,
    allow_min_difficulty_blocks: bool,
    default_consistency_checks: bool,
    require_standard: bool,
    mine_blocks_on_demand: bool,
    skip_proof_of_work_check: bool,
    testnet_to_be_deprecated_field_rpc: bool,
    headers_first_syncing_active: bool,

    // Masternodes and obfuscation pool
    pool_max_transactions: u32,
    spork_key: &'static str,
    obfuscation_pool_dummy_address: &'static str,
    start_masternode_payments: i64,
    budget_fee_confirmations: u32,

    // Zerocoin
    zerocoin_modulus: &'static str,
    max_zerocoin_spends_per_transaction: u32,
    min_zerocoin_mint_fee: Amount,
    mint_required_confirmations: u32,
    required_accumulation: u32,
    default_security_level: u32,
    zerocoin_header_version: i32,

    // Staking
    stake_min_confirmations: u32,
    stake_min_amount: Amount,

    mutable: bool,
}

impl_accessors!(Params,
    /// Network for which parameters are valid.
    network: Network,
    /// Marker starting every P2P message.
    message_start: [u8; 4],
    /// Default P2P port.
    default_port: u16,
    /// Blocks between subsidy halvings.
    subsidy_halving_interval: u32,
    /// Deepest reorganization a node accepts.
    max_reorganization_depth: u32,
    /// Blocks out of the check window that must carry a new version before
    /// it is enforced for new-version blocks.
    enforce_block_upgrade_majority: u32,
    /// Blocks out of the check window that must carry a new version before
    /// old-version blocks are rejected.
    reject_block_outdated_majority: u32,
    /// Size of the window checked for block upgrade majorities.
    to_check_block_upgrade_majority: u32,
    /// Default number of mining threads, 0 for one per core.
    miner_threads: u32,
    /// Difficulty retarget timespan, in seconds.
    target_timespan: i64,
    /// Expected block spacing, in seconds.
    target_spacing: i64,
    /// Confirmations before a coinbase or coinstake can be spent.
    maturity: u32,
    /// Tolerated difference in masternode counts between peers.
    masternode_count_drift: u32,
    /// Maximum money supply.
    max_money_out: Amount,
    /// Last block produced by proof of work.
    last_pow_block: u32,
    /// Height at which the stake modifier computation changed.
    modifier_update_block: u32,
    /// First block accepting zerocoin transactions.
    zerocoin_start_height: u32,
    /// Time from which zerocoin transactions are accepted.
    zerocoin_start_time: i64,
    /// First block with an accumulator checkpoint.
    accumulator_start_height: u32,
    /// Height from which coin serials must lie in range.
    block_enforce_serial_range: u32,
    /// Height triggering an accumulator recalculation. Main uses -2, never
    /// reached.
    block_recalculate_accumulators: i32,
    /// First block carrying bad serials.
    block_first_fraudulent: i32,
    /// Last valid accumulator checkpoint height.
    block_last_good_checkpoint: i32,
    /// Hash of the genesis block.
    genesis_hash: BlockHash,
    /// RPC requires a password.
    require_rpc_password: bool,
    /// Mining waits for at least one peer.
    mining_requires_peers: bool,
    /// Blocks may use the minimum difficulty after a long gap.
    allow_min_difficulty_blocks: bool,
    /// Expensive consistency checks run by default.
    default_consistency_checks: bool,
    /// Only standard transactions are relayed and mined.
    require_standard: bool,
    /// Blocks are mined on request instead of continuously.
    mine_blocks_on_demand: bool,
    /// Proof of work is not checked.
    skip_proof_of_work_check: bool,
    /// RPC still reports the deprecated `testnet` field.
    testnet_to_be_deprecated_field_rpc: bool,
    /// Headers first synchronization is enabled.
    headers_first_syncing_active: bool,
    /// Transactions mixed per obfuscation pool round.
    pool_max_transactions: u32,
    /// Dummy address used by the obfuscation pool.
    obfuscation_pool_dummy_address: &'static str,
    /// Time masternode payments start.
    start_masternode_payments: i64,
    /// Confirmations required on a budget proposal fee.
    budget_fee_confirmations: u32,
    /// Trusted RSA modulus as a decimal string.
    zerocoin_modulus: &'static str,
    /// Maximum zerocoin spends in one transaction.
    max_zerocoin_spends_per_transaction: u32,
    /// Minimum fee for a zerocoin mint.
    min_zerocoin_mint_fee: Amount,
    /// Confirmations before a mint is accumulated.
    mint_required_confirmations: u32,
    /// Accumulation rounds required before spending.
    required_accumulation: u32,
    /// Default security level of zerocoin spends.
    default_security_level: u32,
    /// Block header version introducing zerocoin.
    zerocoin_header_version: i32,
    /// Confirmations before an output can stake.
    stake_min_confirmations: u32,
    /// Minimum staking amount.
    stake_min_amount: Amount,
    /// Whether the setters may be used.
    mutable: bool
);

impl Params {
    /// Creates the parameter set for the given network.
    ///
    /// Prefer [`crate::chainparams::params_for`], which builds each set once.
    pub fn new(network: Network) -> Params {
        match network {
            Network::Main => Params::main(),
            Network::Test => Params::testnet(),
            Network::RegTest => Params::regtest(),
            Network::UnitTest => Params::unit_test(),
        }
    }

    /// Main network parameters.
    pub fn main() -> Params {
        Params::main_base().finish()
    }

    /// Public test network parameters.
    pub fn testnet() -> Params {
        Params::testnet_base().finish()
    }

    /// Regression test parameters.
    pub fn regtest() -> Params {
        Params::regtest_base().finish()
    }

    /// Unit test parameters, the only mutable set.
    pub fn unit_test() -> Params {
        Params::unit_test_base().finish()
    }

    fn main_base() -> Params {
        Params {
            network: Network::Main,
            message_start: [0x01, 0x1f, 0x0e, 0x0b],
            default_port: 17883,
            alert_key: "04c0c1fd5665db73b527da92d4126893b74e39952e21544349e102b9601243d1efdf2cf9c0a669da31c71f28e408533b51b63d13b88fb5ef8498a9e39a4ea60af3",
            // starting difficulty is 1 / 2^12
            pow_limit: (Integer::from(1) << 236u32) - 1u32,
            subsidy_halving_interval: 4_000_000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 2 * 60,
            target_spacing: 2 * 60,
            maturity: 60,
            masternode_count_drift: 20,
            max_money_out: Amount::from_coins(21_000_000),

            last_pow_block: 200,
            modifier_update_block: 1,
            zerocoin_start_height: 101,
            zerocoin_start_time: 1529726034,
            accumulator_start_height: 50,
            block_enforce_serial_range: 1,
            block_recalculate_accumulators: !1,
            block_first_fraudulent: !1,
            block_last_good_checkpoint: !1,

            base58_prefixes: Base58Prefixes {
                pubkey_address: &[73],
                script_address: &[135],
                secret_key: &[207],
                ext_public_key: &[0x03, 0x1E, 0x41, 0x1A],
                ext_secret_key: &[0x03, 0x0A, 0x0C, 0x0F],
                ext_coin_type: &[0x80, 0x00, 0x03, 0x0e],
            },

            genesis: genesis_block(GENESIS_TIME, GENESIS_BITS, GENESIS_NONCE),
            genesis_hash: BlockHash::from_hex(GENESIS_HASH).expect("genesis hash constant is hex"),

            dns_seeds: MAIN_DNS_SEEDS,
            seed_table: seeds::SEEDS_MAIN,

            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,

            pool_max_transactions: 3,
            spork_key: "041733bb44eeb27276227dd3136ea8ece638f32e78cc9061b4251ea32dd2e744d120a5f0cd79f2791153b421c7a3110eef970c5f9af2d7a304af7bca6c7d3b3c04",
            obfuscation_pool_dummy_address: "Wc4TFLSvpeMsGpf6dPhZESaCTpAztEx2LH",
            start_masternode_payments: 1516371317,
            budget_fee_confirmations: 6,

            zerocoin_modulus: ZEROCOIN_MODULUS,
            max_zerocoin_spends_per_transaction: 7,
            min_zerocoin_mint_fee: Amount::CENT,
            mint_required_confirmations: 20,
            required_accumulation: 1,
            default_security_level: 100,
            zerocoin_header_version: 4,

            stake_min_confirmations: 720,
            stake_min_amount: Amount::from_coins(50),

            mutable: false,
        }
    }

    fn testnet_base() -> Params {
        Params {
            network: Network::Test,
            message_start: [0xfa, 0xfb, 0xfc, 0xfd],
            default_port: 12223,
            alert_key: "04bb6495d4a192f1f262177f32e757ad33acac9ac97d09fc69ef7d7185ff0b022fb7b33ad9177e9bdd9aaf042e8a434e10278672600aa773387f36f14dc6ce9111",
            enforce_block_upgrade_majority: 51,
            reject_block_outdated_majority: 75,
            to_check_block_upgrade_majority: 100,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 2 * 60,
            last_pow_block: 200,
            maturity: 15,
            masternode_count_drift: 4,
            modifier_update_block: 51197,
            max_money_out: Amount::from_coins(43_199_500),
            zerocoin_start_height: 50,
            zerocoin_start_time: 1529726039,
            block_enforce_serial_range: 1,
            block_recalculate_accumulators: 9908000,
            block_first_fraudulent: 9891737,
            block_last_good_checkpoint: 9891730,

            base58_prefixes: Base58Prefixes {
                pubkey_address: &[132],
                script_address: &[111],
                secret_key: &[200],
                ext_public_key: &[0x3a, 0x2a, 0x12, 0x11],
                ext_secret_key: &[0x3a, 0x41, 0x11, 0x1a],
                ext_coin_type: &[0x80, 0x00, 0x00, 0x01],
            },

            dns_seeds: TEST_DNS_SEEDS,
            seed_table: seeds::SEEDS_TEST,

            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,

            pool_max_transactions: 2,
            spork_key: "04a16e2cda855959bc1b781f9933c0409dfbe6dadf29bed44c4db5616a0e5de098f6aee22d411e5437a1e540a47a2387923983c872a81f8a4a9fc83b3de5a7d84e",
            obfuscation_pool_dummy_address: "vKLGLuunexRfMGTGkeErfmvgKx8gBq681Q",
            start_masternode_payments: 1420837558,
            budget_fee_confirmations: 3,

            stake_min_confirmations: 30,
            stake_min_amount: Amount::from_coins(1000),

            ..Params::main_base()
        }
    }

    fn regtest_base() -> Params {
        Params {
            network: Network::RegTest,
            message_start: [0xf1, 0xf2, 0xf3, 0xf4],
            subsidy_halving_interval: 150,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 1,
            target_timespan: 24 * 60 * 60,
            target_spacing: 60,
            pow_limit: (Integer::from(1) << 255u32) - 1u32,
            default_port: 36210,

            dns_seeds: &[],
            seed_table: &[],

            require_rpc_password: false,
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,

            ..Params::testnet_base()
        }
    }

    fn unit_test_base() -> Params {
        Params {
            network: Network::UnitTest,
            default_port: 51478,

            dns_seeds: &[],
            seed_table: &[],

            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,

            mutable: true,
            ..Params::main_base()
        }
    }

    /// Hashes the genesis block and checks it against the embedded constants.
    ///
    /// # Panics
    ///
    /// When the merkle root, the header hash or the proof of work does not
    /// match: the node would otherwise run on a different chain than it
    /// believes.
    fn finish(self) -> Params {
        let merkle_root = self.genesis.compute_merkle_root();
        assert_eq!(
            merkle_root.map(|root| format!("{:x}", root)),
            Some(GENESIS_MERKLE_ROOT.to_owned()),
            "{} genesis merkle root mismatch",
            self.network
        );
        assert_eq!(
            format!("{:x}", self.genesis.header.block_hash()),
            GENESIS_HEADER_DIGEST,
            "{} genesis header hash mismatch",
            self.network
        );
        assert!(
            block::check_proof_of_work(&self.genesis_hash, self.genesis.header.bits, &self.pow_limit),
            "{} genesis hash does not meet its target",
            self.network
        );
        debug!("built {} chain parameters, port {}", self.network, self.default_port);
        self
    }

    /// The network's `-chain` name.
    pub fn network_id(&self) -> &'static str {
        self.network.to_core_arg()
    }

    /// Highest target a block may have.
    pub fn pow_limit(&self) -> &Integer {
        &self.pow_limit
    }

    /// The genesis block.
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    /// Checks the embedded genesis hash with another header hash function.
    pub fn genesis_hash_matches(&self, hasher: &dyn HeaderHasher) -> bool {
        self.genesis.header.block_hash_with(hasher) == self.genesis_hash
    }

    /// Alert public key.
    pub fn alert_key(&self) -> Result<secp256k1::PublicKey, secp256k1::Error> {
        public_key(self.alert_key)
    }

    /// Spork public key.
    pub fn spork_key(&self) -> Result<secp256k1::PublicKey, secp256k1::Error> {
        public_key(self.spork_key)
    }

    /// Version prefix of the given kind of base58 data.
    pub fn base58_prefix(&self, ty: Base58Type) -> &'static [u8] {
        let prefixes = &self.base58_prefixes;
        match ty {
            Base58Type::PubkeyAddress => prefixes.pubkey_address,
            Base58Type::ScriptAddress => prefixes.script_address,
            Base58Type::SecretKey => prefixes.secret_key,
            Base58Type::ExtPublicKey => prefixes.ext_public_key,
            Base58Type::ExtSecretKey => prefixes.ext_secret_key,
            Base58Type::ExtCoinType => prefixes.ext_coin_type,
        }
    }

    /// DNS seeds, in query order.
    pub fn dns_seeds(&self) -> &'static [DnsSeed] {
        self.dns_seeds
    }

    /// The raw fixed seed table.
    pub fn seed_table(&self) -> &'static [SeedSpec6] {
        self.seed_table
    }

    /// Fixed seeds as address records, timestamped against the system clock.
    pub fn fixed_seeds(&self) -> Vec<Address> {
        seeds::convert_seed6(self.seed_table, unix_time(SystemTime::now()), &mut rand::thread_rng())
    }

    /// Checkpoints of this network.
    pub fn checkpoints(&self) -> &'static CheckpointData {
        checkpoints::checkpoints_for(self.network)
    }

    /// Shared zerocoin parameters, built on first use.
    pub fn zerocoin_params(&self) -> &'static ZerocoinParams {
        zerocoin::shared(self.zerocoin_modulus)
    }

    /// Blocks per difficulty adjustment.
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Whether this is the regression test network.
    pub fn is_regtest(&self) -> bool {
        self.network == Network::RegTest
    }

    /// Whether `value` is a valid amount of money on this network.
    pub fn money_range(&self, value: Amount) -> bool {
        !value.is_negative() && value <= self.max_money_out
    }

    /// Checks that `hash` satisfies `bits` within this network's limit.
    /// Always passes when the network skips proof of work checks.
    pub fn check_proof_of_work(&self, hash: &BlockHash, bits: u32) -> bool {
        self.skip_proof_of_work_check || block::check_proof_of_work(hash, bits, &self.pow_limit)
    }

    fn assert_mutable(&self) {
        assert!(self.mutable, "{} chain parameters are not mutable", self.network);
    }

    /// Overrides the subsidy halving interval.
    ///
    /// # Panics
    ///
    /// On every set but the unit test one, same for the other setters.
    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.assert_mutable();
        self.subsidy_halving_interval = interval;
    }

    /// Overrides the enforce block upgrade majority.
    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.assert_mutable();
        self.enforce_block_upgrade_majority = majority;
    }

    /// Overrides the reject block outdated majority.
    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.assert_mutable();
        self.reject_block_outdated_majority = majority;
    }

    /// Overrides the block upgrade check window.
    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.assert_mutable();
        self.to_check_block_upgrade_majority = window;
    }

    /// Toggles default consistency checks.
    pub fn set_default_consistency_checks(&mut self, value: bool) {
        self.assert_mutable();
        self.default_consistency_checks = value;
    }

    /// Toggles minimum difficulty blocks.
    pub fn set_allow_min_difficulty_blocks(&mut self, value: bool) {
        self.assert_mutable();
        self.allow_min_difficulty_blocks = value;
    }

    /// Toggles the proof of work check.
    pub fn set_skip_proof_of_work_check(&mut self, value: bool) {
        self.assert_mutable();
        self.skip_proof_of_work_check = value;
    }
}

/// Seconds since the epoch. A clock set before it counts as the epoch.
fn unix_time(now: SystemTime) -> i64 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(e) => {
            warn!("system clock is {}s before the unix epoch, using 0", e.duration().as_secs());
            0
        }
    }
}

fn public_key(hex: &str) -> Result<secp256k1::PublicKey, secp256k1::Error> {
    let bytes = Vec::<u8>::from_hex(hex).expect("embedded public key is hex");
    secp256k1::PublicKey::from_slice(&bytes)
}
