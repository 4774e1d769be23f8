// SPDX-License-Identifier: CC0-1.0

//! Zerocoin parameters
//!
//! Accumulator and coin commitment group parameters derived from a trusted
//! RSA modulus. Building them is expensive and every network uses the same
//! modulus, so the process keeps a single shared instance, see [`shared`].
//!

use std::{error, fmt};

use hashes::{sha256d, Hash, HashEngine};
use once_cell::sync::OnceCell;
use rug::integer::{IsPrime, Order, ParseIntegerError};
use rug::Integer;

/// Base used for the RSA accumulator.
pub const ACCUMULATOR_BASE: u32 = 961;
/// Bit length of the proof of knowledge challenge.
pub const K_PRIME: u32 = 160;
/// Statistical zero-knowledge slack, in bits.
pub const K_DPRIME: u32 = 128;
/// Security level the shared parameters are built for.
pub const DEFAULT_SECURITY_LEVEL: u32 = 80;
/// Minimum accepted modulus size, in bits.
pub const MIN_MODULUS_BITS: u32 = 1023;

const PRIMALITY_ROUNDS: u32 = 25;

static ZEROCOIN_PARAMS: OnceCell<ZerocoinParams> = OnceCell::new();

/// Errors building zerocoin parameters.
#[derive(Debug)]
pub enum Error {
    /// The modulus is not a decimal integer.
    Parse(ParseIntegerError),
    /// The modulus is smaller than [`MIN_MODULUS_BITS`].
    ModulusTooSmall(u32),
    /// The modulus is even.
    ModulusEven,
    /// The modulus is prime, an RSA modulus must be composite.
    ModulusPrime,
    /// No coin commitment group is defined for this security level.
    UnsupportedSecurityLevel(u32),
    /// The commitment group does not fit below the modulus.
    GroupTooLarge {
        /// Required group modulus length
        p_len: u32,
        /// Bit length of the accumulator modulus
        modulus_bits: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref e) => write!(f, "invalid modulus: {}", e),
            Error::ModulusTooSmall(bits) => write!(f, "modulus has {} bits, need at least {}", bits, MIN_MODULUS_BITS),
            Error::ModulusEven => f.write_str("modulus is even"),
            Error::ModulusPrime => f.write_str("modulus is prime"),
            Error::UnsupportedSecurityLevel(level) => write!(f, "unsupported security level {}", level),
            Error::GroupTooLarge { p_len, modulus_bits } => write!(
                f,
                "commitment group of {} bits does not fit a {} bit modulus",
                p_len, modulus_bits
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Parse(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<ParseIntegerError> for Error {
    fn from(e: ParseIntegerError) -> Error {
        Error::Parse(e)
    }
}

/// Bit lengths of the coin commitment group for a security level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupLengths {
    /// Length of the group modulus `p`
    pub p_len: u32,
    /// Length of the group order `q`
    pub q_len: u32,
}

impl GroupLengths {
    /// Returns the group lengths for `security_level`.
    pub fn for_security_level(security_level: u32) -> Result<GroupLengths, Error> {
        let (p_len, q_len) = match security_level {
            0..=80 => (1024, 256),
            81..=112 => (2048, 256),
            113..=128 => (3072, 320),
            _ => return Err(Error::UnsupportedSecurityLevel(security_level)),
        };
        Ok(GroupLengths { p_len, q_len })
    }
}

/// RSA accumulator parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccumulatorParams {
    /// The trusted RSA modulus
    pub modulus: Integer,
    /// Accumulator base
    pub base: Integer,
    /// Proof challenge length
    pub k_prime: u32,
    /// Proof slack length
    pub k_dprime: u32,
}

/// The full zerocoin parameter object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZerocoinParams {
    /// Accumulator parameters
    pub accumulator: AccumulatorParams,
    /// Coin commitment group lengths
    pub coin_commitment_group: GroupLengths,
    /// Security level the parameters were built for
    pub security_level: u32,
    /// Digest binding the modulus and the security level, used to derive
    /// group generators deterministically
    pub seed: sha256d::Hash,
}

impl ZerocoinParams {
    /// Builds parameters from a decimal modulus string.
    pub fn from_decimal(modulus: &str, security_level: u32) -> Result<ZerocoinParams, Error> {
        let modulus: Integer = modulus.parse()?;
        ZerocoinParams::new(modulus, security_level)
    }

    /// Validates `modulus` and derives the parameters for `security_level`.
    pub fn new(modulus: Integer, security_level: u32) -> Result<ZerocoinParams, Error> {
        let modulus_bits = modulus.significant_bits();
        if modulus_bits < MIN_MODULUS_BITS {
            return Err(Error::ModulusTooSmall(modulus_bits));
        }
        if modulus.is_even() {
            return Err(Error::ModulusEven);
        }
        if modulus.is_probably_prime(PRIMALITY_ROUNDS) != IsPrime::No {
            return Err(Error::ModulusPrime);
        }

        let group = GroupLengths::for_security_level(security_level)?;
        if group.p_len > modulus_bits - 2 {
            return Err(Error::GroupTooLarge { p_len: group.p_len, modulus_bits });
        }

        let mut engine = sha256d::Hash::engine();
        engine.input(&modulus.to_digits::<u8>(Order::Msf));
        engine.input(&security_level.to_le_bytes());
        let seed = sha256d::Hash::from_engine(engine);

        Ok(ZerocoinParams {
            accumulator: AccumulatorParams {
                modulus,
                base: Integer::from(ACCUMULATOR_BASE),
                k_prime: K_PRIME,
                k_dprime: K_DPRIME,
            },
            coin_commitment_group: group,
            security_level,
            seed,
        })
    }
}

/// Returns the process-wide parameters, building them from `modulus` on the
/// first call.
///
/// Later calls return the same instance whatever modulus they pass.
///
/// # Panics
///
/// When the first modulus is rejected: it is an embedded constant.
pub fn shared(modulus: &str) -> &'static ZerocoinParams {
    ZEROCOIN_PARAMS.get_or_init(|| {
        let params = ZerocoinParams::from_decimal(modulus, DEFAULT_SECURITY_LEVEL)
            .expect("embedded zerocoin modulus is a valid RSA modulus");
        debug!(
            "built zerocoin params: {} bit modulus, security level {}",
            params.accumulator.modulus.significant_bits(),
            params.security_level
        );
        params
    })
}

#[cfg(test)]
mod tests {
    use rug::Integer;

    use super::*;

    // RSA-2048 challenge number.
    const RSA_2048: &str = concat!(
        "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784",
        "4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911",
        "6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363",
        "7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133",
        "8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548",
        "31438167899885040445364023527381951378636564391212010397122822120720357"
    );

    #[test]
    fn rsa_2048_params() {
        let params = ZerocoinParams::from_decimal(RSA_2048, DEFAULT_SECURITY_LEVEL).unwrap();
        assert_eq!(params.accumulator.modulus.significant_bits(), 2048);
        assert_eq!(params.accumulator.base, 961);
        assert_eq!(params.accumulator.k_prime, 160);
        assert_eq!(params.accumulator.k_dprime, 128);
        assert_eq!(params.coin_commitment_group, GroupLengths { p_len: 1024, q_len: 256 });

        let strong = ZerocoinParams::from_decimal(RSA_2048, 112).unwrap();
        assert_eq!(strong.coin_commitment_group, GroupLengths { p_len: 2048, q_len: 256 });
        assert_ne!(strong.seed, params.seed);

        // deterministic
        assert_eq!(ZerocoinParams::from_decimal(RSA_2048, 80).unwrap().seed, params.seed);
    }

    #[test]
    fn rejected_moduli() {
        assert!(matches!(ZerocoinParams::from_decimal("12a4", 80), Err(Error::Parse(_))));

        let small = Integer::from(0xffff_fffbu32);
        assert!(matches!(ZerocoinParams::new(small, 80), Err(Error::ModulusTooSmall(32))));

        let even = Integer::from(1) << 1100u32;
        assert!(matches!(ZerocoinParams::new(even, 80), Err(Error::ModulusEven)));

        // 2^1279 - 1 is a Mersenne prime
        let prime = (Integer::from(1) << 1279u32) - 1u32;
        assert!(matches!(ZerocoinParams::new(prime, 80), Err(Error::ModulusPrime)));

        assert!(matches!(
            ZerocoinParams::from_decimal(RSA_2048, 128),
            Err(Error::GroupTooLarge { p_len: 3072, modulus_bits: 2048 })
        ));
        assert!(matches!(
            ZerocoinParams::from_decimal(RSA_2048, 129),
            Err(Error::UnsupportedSecurityLevel(129))
        ));
        assert_eq!(
            Error::GroupTooLarge { p_len: 3072, modulus_bits: 2048 }.to_string(),
            "commitment group of 3072 bits does not fit a 2048 bit modulus"
        );
    }

    #[test]
    fn group_lengths() {
        assert_eq!(GroupLengths::for_security_level(1).unwrap().p_len, 1024);
        assert_eq!(GroupLengths::for_security_level(80).unwrap().p_len, 1024);
        assert_eq!(GroupLengths::for_security_level(81).unwrap().p_len, 2048);
        assert_eq!(GroupLengths::for_security_level(128).unwrap().q_len, 320);
        assert!(GroupLengths::for_security_level(256).is_err());
    }

    #[test]
    fn shared_is_built_once() {
        let first = shared(RSA_2048);
        let second = shared(RSA_2048);
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.security_level, DEFAULT_SECURITY_LEVEL);
    }
}
