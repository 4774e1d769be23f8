// SPDX-License-Identifier: CC0-1.0

//! Seed nodes
//!
//! Fixed seed tables for each network and their conversion into peer address
//! records. A node only connects to one or two seed nodes: once connected it
//! receives plenty of addresses with newer timestamps.
//!

use rand::Rng;

use crate::network::address::Address;
use crate::network::constants::ServiceFlags;

/// One week in seconds.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A fixed seed entry: a 16-byte address (IPv4-mapped or native IPv6) and a port.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeedSpec6 {
    /// IPv6 or IPv4-mapped address
    pub addr: [u8; 16],
    /// Network port
    pub port: u16,
}

impl SeedSpec6 {
    /// Builds an IPv4-mapped entry.
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> SeedSpec6 {
        SeedSpec6 {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }
}

/// Main network fixed seeds.
pub const SEEDS_MAIN: &[SeedSpec6] = &[
    SeedSpec6::ipv4(167, 86, 104, 232, 17883),
    SeedSpec6::ipv4(167, 86, 125, 202, 17883),
    SeedSpec6::ipv4(45, 32, 145, 142, 17883),
    SeedSpec6::ipv4(95, 179, 200, 213, 17883),
    SeedSpec6::ipv4(45, 63, 10, 156, 17883),
    SeedSpec6::ipv4(144, 202, 53, 246, 17883),
    SeedSpec6::ipv4(104, 207, 130, 217, 17883),
    SeedSpec6::ipv4(45, 77, 5, 22, 17883),
    SeedSpec6::ipv4(5, 189, 161, 64, 17883),
    SeedSpec6::ipv4(173, 249, 8, 46, 17883),
];

/// Test network fixed seeds. The test network relies on its DNS seed.
pub const SEEDS_TEST: &[SeedSpec6] = &[];

/// Converts a seed table into address records.
///
/// Each record gets a random "last seen" time between one and two weeks
/// before `now`, so seeds look neither fresh nor stale enough to be evicted.
/// The randomness is not a security boundary.
pub fn convert_seed6<R: Rng + ?Sized>(seeds: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<Address> {
    trace!("converting {} fixed seeds", seeds.len());
    seeds
        .iter()
        .map(|seed| {
            let last_seen = now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK;
            Address::from_raw(seed.addr, seed.port, ServiceFlags::NETWORK, last_seen)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::str::FromStr;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn convert_seed6_test() {
        let mut rng = StdRng::seed_from_u64(17883);
        let now = 1_600_000_000;
        let addrs = convert_seed6(SEEDS_MAIN, now, &mut rng);

        assert_eq!(addrs.len(), SEEDS_MAIN.len());
        for addr in &addrs {
            assert!(addr.last_seen >= now - 2 * ONE_WEEK);
            assert!(addr.last_seen <= now - ONE_WEEK);
            assert!(addr.services.has(ServiceFlags::NETWORK));
        }
        assert_eq!(addrs[0].socket_addr(), SocketAddr::from_str("167.86.104.232:17883").unwrap());
        assert_eq!(addrs[9].socket_addr(), SocketAddr::from_str("173.249.8.46:17883").unwrap());
    }

    #[test]
    fn convert_seed6_ipv6_test() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[2] = 0x0d;
        addr[3] = 0xb8;
        addr[15] = 0x01;
        let seeds = [SeedSpec6 { addr, port: 12223 }];
        let addrs = convert_seed6(&seeds, 0, &mut StdRng::seed_from_u64(1));
        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].socket_addr(), SocketAddr::from_str("[2001:db8::1]:12223").unwrap());
        assert!(addrs[0].last_seen < 0);
    }

    #[test]
    fn convert_seed6_spread_test() {
        // timestamps must not all collapse onto one value
        let mut rng = StdRng::seed_from_u64(7);
        let table = vec![SeedSpec6::ipv4(127, 0, 0, 1, 36210); 64];
        let addrs = convert_seed6(&table, ONE_WEEK * 10, &mut rng);
        let first = addrs[0].last_seen;
        assert!(addrs.iter().any(|a| a.last_seen != first));
        assert!(convert_seed6(SEEDS_TEST, 0, &mut rng).is_empty());
    }
}
