// SPDX-License-Identifier: CC0-1.0

//! Peer addresses
//!
//! This module defines the address record a node keeps for each known peer:
//! where it is reachable, which services it advertised and when it was last
//! seen.
//!

use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use crate::network::constants::ServiceFlags;

/// A peer address together with its advertised services and "last seen" time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    /// Services provided by the peer whose address this is
    pub services: ServiceFlags,
    /// Network address of the peer
    pub address: [u16; 8],
    /// Network port
    pub port: u16,
    /// Unix time the peer was last seen
    pub last_seen: i64,
}

impl Address {
    /// Create an address message for a socket
    pub fn new(socket: &SocketAddr, services: ServiceFlags, last_seen: i64) -> Address {
        let (address, port) = match *socket {
            SocketAddr::V4(addr) => (addr.ip().to_ipv6_mapped().segments(), addr.port()),
            SocketAddr::V6(addr) => (addr.ip().segments(), addr.port()),
        };
        Address { address, port, services, last_seen }
    }

    /// Create an address from the raw 16-byte form used in seed tables.
    pub fn from_raw(addr: [u8; 16], port: u16, services: ServiceFlags, last_seen: i64) -> Address {
        Address {
            address: Ipv6Addr::from(addr).segments(),
            port,
            services,
            last_seen,
        }
    }

    /// The IP address, unwrapping IPv4-mapped addresses.
    pub fn ip(&self) -> IpAddr {
        let addr = Ipv6Addr::new(
            self.address[0],
            self.address[1],
            self.address[2],
            self.address[3],
            self.address[4],
            self.address[5],
            self.address[6],
            self.address[7],
        );
        match addr.segments() {
            [0, 0, 0, 0, 0, 0xffff, ..] => {
                let octets = addr.octets();
                IpAddr::from([octets[12], octets[13], octets[14], octets[15]])
            }
            _ => IpAddr::V6(addr),
        }
    }

    /// The socket address to connect to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip(), self.port)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Address {{services: {}, address: {}, last_seen: {}}}",
            self.services,
            self.socket_addr(),
            self.last_seen
        )
    }
}
