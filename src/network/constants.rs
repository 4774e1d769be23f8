// SPDX-License-Identifier: CC0-1.0

//! Network constants
//!
//! The term "network" is overloaded, here [`Network`] refers to the specific
//! WMP chain a node operates on: main, test, regtest or the in-process unit
//! test chain. This module also provides the service flags advertised in peer
//! address records.
//!
//! # Example: resolving a network from configuration
//!
//! ```rust
//! use chainparams::network::constants::Network;
//!
//! assert_eq!("regtest".parse::<Network>().unwrap(), Network::RegTest);
//! assert_eq!(Network::from_flags(true, false), Ok(Network::Test));
//! assert!("fakenet".parse::<Network>().is_err());
//! ```

use std::{error, fmt, io, ops};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consensus::encode::{self, Encodable};

/// The WMP network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Regression test network, for local testing
    RegTest,
    /// In-process unit test network
    UnitTest,
}

impl Network {
    /// Every network, in declaration order.
    pub const ALL: [Network; 4] = [Network::Main, Network::Test, Network::RegTest, Network::UnitTest];

    /// Converts a `Network` to its equivalent `-chain` argument name.
    pub fn to_core_arg(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::RegTest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    /// Converts a `-chain` argument name to its equivalent `Network`.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        use Network::*;

        let network = match core_arg {
            "main" => Main,
            "test" => Test,
            "regtest" => RegTest,
            "unittest" => UnitTest,
            _ => return Err(ParseNetworkError::Unknown(core_arg.to_owned())),
        };
        Ok(network)
    }

    /// Resolves the `-testnet` and `-regtest` command line switches.
    ///
    /// Neither switch selects main; setting both is an error the caller must
    /// report, never a silent default.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self, ParseNetworkError> {
        match (testnet, regtest) {
            (true, true) => Err(ParseNetworkError::ConflictingFlags),
            (false, true) => Ok(Network::RegTest),
            (true, false) => Ok(Network::Test),
            (false, false) => Ok(Network::Main),
        }
    }
}

#[cfg(feature = "serde")]
pub mod as_core_arg {
    //! Module for serialization/deserialization of network variants into/from `-chain` values
    #![allow(missing_docs)]

    use serde;

    use crate::Network;

    pub fn serialize<S>(network: &Network, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(network.to_core_arg())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NetworkVisitor;

        impl<'de> serde::de::Visitor<'de> for NetworkVisitor {
            type Value = Network;

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Network::from_core_arg(s).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(s),
                        &"WMP network encoded as a string (either main, test, regtest or unittest)",
                    )
                })
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    formatter,
                    "WMP network encoded as a string (either main, test, regtest or unittest)"
                )
            }
        }

        deserializer.deserialize_str(NetworkVisitor)
    }
}

/// An error in resolving a network from configuration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNetworkError {
    /// The name does not match any network.
    Unknown(String),
    /// Both `-testnet` and `-regtest` were given.
    ConflictingFlags,
}

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseNetworkError::Unknown(ref s) => write!(f, "failed to parse {} as network", s),
            ParseNetworkError::ConflictingFlags => {
                write!(f, "invalid combination of -regtest and -testnet")
            }
        }
    }
}

impl error::Error for ParseNetworkError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_core_arg(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_core_arg())
    }
}

/// Flags to indicate which network services a node supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// NONE means no services supported.
    pub const NONE: ServiceFlags = ServiceFlags(0);

    /// NETWORK means that the node is capable of serving the complete block chain.
    pub const NETWORK: ServiceFlags = ServiceFlags(1 << 0);

    /// BLOOM means the node is capable and willing to handle bloom-filtered connections.
    pub const BLOOM: ServiceFlags = ServiceFlags(1 << 2);

    /// BLOOM_WITHOUT_MN means the node handles bloom-filtered connections
    /// but does not relay masternode messages.
    pub const BLOOM_WITHOUT_MN: ServiceFlags = ServiceFlags(1 << 4);

    // NOTE: When adding new flags, remember to update the Display impl accordingly.

    /// Add [ServiceFlags] together.
    ///
    /// Returns itself.
    pub fn add(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 |= other.0;
        *self
    }

    /// Remove [ServiceFlags] from this.
    ///
    /// Returns itself.
    pub fn remove(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 &= !other.0;
        *self
    }

    /// Check whether [ServiceFlags] are included in this one.
    pub fn has(&self, flags: ServiceFlags) -> bool {
        (self.0 | flags.0) == self.0
    }

    /// Get the integer representation of this [ServiceFlags].
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::LowerHex for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == ServiceFlags::NONE {
            return write!(f, "ServiceFlags(NONE)");
        }

        let mut flags = *self;
        let mut first = true;
        macro_rules! write_flag {
            ($f:ident) => {
                if flags.has(ServiceFlags::$f) {
                    if !first {
                        write!(f, "|")?;
                    }
                    first = false;
                    write!(f, stringify!($f))?;
                    flags.remove(ServiceFlags::$f);
                }
            };
        }
        write!(f, "ServiceFlags(")?;
        write_flag!(NETWORK);
        write_flag!(BLOOM);
        write_flag!(BLOOM_WITHOUT_MN);
        // If there are unknown flags left, we append them in hex.
        if flags != ServiceFlags::NONE {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "0x{:x}", flags)?;
        }
        write!(f, ")")
    }
}

impl From<u64> for ServiceFlags {
    fn from(f: u64) -> Self {
        ServiceFlags(f)
    }
}

impl From<ServiceFlags> for u64 {
    fn from(flags: ServiceFlags) -> Self {
        flags.0
    }
}

impl ops::BitOr for ServiceFlags {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self.add(rhs)
    }
}

impl ops::BitOrAssign for ServiceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.add(rhs);
    }
}

impl ops::BitXor for ServiceFlags {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self.remove(rhs)
    }
}

impl ops::BitXorAssign for ServiceFlags {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.remove(rhs);
    }
}

impl Encodable for ServiceFlags {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        self.0.consensus_encode(&mut s)
    }
}

#[cfg(test)]
mod tests {
    use super::{Network, ParseNetworkError, ServiceFlags};
    use crate::consensus::encode::serialize;

    #[test]
    fn string_test() {
        assert_eq!(Network::Main.to_string(), "main");
        assert_eq!(Network::Test.to_string(), "test");
        assert_eq!(Network::RegTest.to_string(), "regtest");
        assert_eq!(Network::UnitTest.to_string(), "unittest");

        for network in Network::ALL.iter() {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), *network);
        }
        assert_eq!(
            "fakenet".parse::<Network>(),
            Err(ParseNetworkError::Unknown("fakenet".to_owned()))
        );
        assert!("Main".parse::<Network>().is_err());
    }

    #[test]
    fn from_flags_test() {
        assert_eq!(Network::from_flags(false, false), Ok(Network::Main));
        assert_eq!(Network::from_flags(true, false), Ok(Network::Test));
        assert_eq!(Network::from_flags(false, true), Ok(Network::RegTest));
        assert_eq!(Network::from_flags(true, true), Err(ParseNetworkError::ConflictingFlags));
        assert_eq!(
            ParseNetworkError::ConflictingFlags.to_string(),
            "invalid combination of -regtest and -testnet"
        );
    }

    #[test]
    fn from_to_core_arg() {
        let expected_pairs = [
            (Network::Main, "main"),
            (Network::Test, "test"),
            (Network::RegTest, "regtest"),
            (Network::UnitTest, "unittest"),
        ];

        for (net, core_arg) in &expected_pairs {
            assert_eq!(Network::from_core_arg(core_arg), Ok(*net));
            assert_eq!(net.to_core_arg(), *core_arg);
        }
    }

    #[test]
    fn service_flags_test() {
        let all = [ServiceFlags::NETWORK, ServiceFlags::BLOOM, ServiceFlags::BLOOM_WITHOUT_MN];

        let mut flags = ServiceFlags::NONE;
        for f in all.iter() {
            assert!(!flags.has(*f));
        }

        flags |= ServiceFlags::BLOOM;
        assert_eq!(flags, ServiceFlags::BLOOM);

        let mut flags2 = flags | ServiceFlags::NETWORK;
        for f in all.iter() {
            assert_eq!(flags2.has(*f), *f == ServiceFlags::BLOOM || *f == ServiceFlags::NETWORK);
        }

        flags2 ^= ServiceFlags::BLOOM;
        assert_eq!(flags2, ServiceFlags::NETWORK);

        // removing a flag that is not set leaves it unset
        flags2.remove(ServiceFlags::BLOOM);
        assert_eq!(flags2, ServiceFlags::NETWORK);
        assert!(!flags2.has(ServiceFlags::BLOOM));
        let mut none = ServiceFlags::NONE;
        assert_eq!(none.remove(ServiceFlags::BLOOM_WITHOUT_MN), ServiceFlags::NONE);

        // Test formatting.
        assert_eq!("ServiceFlags(NONE)", ServiceFlags::NONE.to_string());
        assert_eq!("ServiceFlags(BLOOM)", ServiceFlags::BLOOM.to_string());
        let flag = ServiceFlags::BLOOM_WITHOUT_MN | ServiceFlags::NETWORK;
        assert_eq!("ServiceFlags(NETWORK|BLOOM_WITHOUT_MN)", flag.to_string());
        let flag = ServiceFlags::NETWORK | 0xa0.into();
        assert_eq!("ServiceFlags(NETWORK|0xa0)", flag.to_string());

        assert_eq!(serialize(&ServiceFlags::NETWORK), vec![1u8, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(u64::from(flag), 0xa1);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        use Network::*;
        let tests = vec![(Main, "main"), (Test, "test"), (RegTest, "regtest"), (UnitTest, "unittest")];

        for tc in tests {
            let network = tc.0;

            let want = format!("\"{}\"", tc.1);
            let got = serde_json::to_string(&tc.0).expect("failed to serialize network");
            assert_eq!(got, want);

            let back: Network = serde_json::from_str(&got).expect("failed to deserialize network");
            assert_eq!(back, network);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_core_arg() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct T {
            #[serde(with = "crate::network::constants::as_core_arg")]
            pub network: Network,
        }

        serde_test::assert_tokens(
            &T { network: Network::RegTest },
            &[
                serde_test::Token::Struct { name: "T", len: 1 },
                serde_test::Token::Str("network"),
                serde_test::Token::Str("regtest"),
                serde_test::Token::StructEnd,
            ],
        );
    }
}
