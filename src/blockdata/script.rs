// SPDX-License-Identifier: CC0-1.0

//! Script
//!
//! Scripts define Bitcoin's digital signature scheme: a signature is formed
//! from a script (the second half of which is defined by a coin to be spent,
//! and the first half provided by the spending transaction), and is valid
//! iff the script leaves `TRUE` on the stack after being evaluated.
//!
//! This library never evaluates scripts; it only builds the coinbase and
//! output scripts of genesis blocks.
//!

use std::{fmt, io};

use hashes::hex::ToHex;

use crate::blockdata::opcodes;
use crate::consensus::encode::{self, Encodable, VarInt};

/// A Bitcoin script
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Script(Box<[u8]>);

impl Script {
    /// Creates a new empty script
    pub fn new() -> Script {
        Script(vec![].into_boxed_slice())
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the script data
    pub fn as_bytes(&self) -> &[u8] {
        &*self.0
    }

    /// Converts the script into a byte vector
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone().into_vec()
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", self.0.to_hex())
    }
}

impl fmt::LowerHex for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl From<Vec<u8>> for Script {
    fn from(v: Vec<u8>) -> Script {
        Script(v.into_boxed_slice())
    }
}

impl Encodable for Script {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let len = VarInt(self.0.len() as u64).consensus_encode(&mut s)?;
        s.write_all(&self.0)?;
        Ok(len + self.0.len())
    }
}

/// Helper to encode an integer in script format
///
/// Numbers are little-endian, minimally encoded, with the sign carried in
/// the high bit of the last byte.
pub fn build_scriptint(n: i64) -> Vec<u8> {
    if n == 0 {
        return vec![];
    }

    let neg = n < 0;

    let mut abs = if neg { -n } else { n } as usize;
    let mut v = vec![];
    while abs > 0xFF {
        v.push((abs & 0xFF) as u8);
        abs >>= 8;
    }
    // If the number's value causes the sign bit to be set, we need an extra
    // byte to get the correct value and correct sign bit
    if abs & 0x80 != 0 {
        v.push(abs as u8);
        v.push(if neg { 0x80u8 } else { 0u8 });
    }
    // Otherwise we just set the sign bit ourselves
    else {
        abs |= if neg { 0x80 } else { 0 };
        v.push(abs as u8);
    }
    v
}

/// An object which can be used to construct a script piece by piece
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    /// Creates a new empty script
    pub fn new() -> Self {
        Builder(vec![])
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds instructions to push an integer onto the stack. Integers are
    /// encoded as little-endian signed-magnitude numbers, but there are
    /// dedicated opcodes to push some small integers.
    pub fn push_int(self, data: i64) -> Builder {
        // We can special-case -1, 1-16
        if data == -1 || (data >= 1 && data <= 16) {
            let opcode = opcodes::All::from(
                (data - 1 + opcodes::all::OP_PUSHNUM_1.into_u8() as i64) as u8,
            );
            self.push_opcode(opcode)
        }
        // We can also special-case zero
        else if data == 0 {
            self.push_opcode(opcodes::all::OP_PUSHBYTES_0)
        }
        // Otherwise encode it as data
        else {
            self.push_scriptint(data)
        }
    }

    /// Adds instructions to push an integer onto the stack, using the explicit
    /// encoding regardless of the availability of dedicated opcodes.
    pub fn push_scriptint(self, data: i64) -> Builder {
        self.push_slice(&build_scriptint(data))
    }

    /// Adds instructions to push some arbitrary data onto the stack
    pub fn push_slice(mut self, data: &[u8]) -> Builder {
        // Start with a PUSH opcode
        match data.len() as u64 {
            n if n < opcodes::all::OP_PUSHDATA1.into_u8() as u64 => {
                self.0.push(n as u8);
            }
            n if n < 0x100 => {
                self.0.push(opcodes::all::OP_PUSHDATA1.into_u8());
                self.0.push(n as u8);
            }
            n if n < 0x10000 => {
                self.0.push(opcodes::all::OP_PUSHDATA2.into_u8());
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n if n < 0x100000000 => {
                self.0.push(opcodes::all::OP_PUSHDATA4.into_u8());
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
            _ => panic!("tried to put a 4bn+ sized object into a script!"),
        }
        // Then push the raw bytes
        self.0.extend(data.iter().cloned());
        self
    }

    /// Adds a single opcode to the script
    pub fn push_opcode(mut self, data: opcodes::All) -> Builder {
        self.0.push(data.into_u8());
        self
    }

    /// Converts the `Builder` into an unmodifiable `Script`
    pub fn into_script(self) -> Script {
        Script(self.0.into_boxed_slice())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::blockdata::opcodes;
    use crate::consensus::encode::serialize;

    #[test]
    fn script_build() {
        // small ints
        let script = Builder::new().push_int(1).push_int(4).push_int(16).push_int(-1).into_script();
        assert_eq!(script.as_bytes(), &[0x51u8, 0x54, 0x60, 0x4f][..]);
        // zero
        let script = Builder::new().push_int(0).into_script();
        assert_eq!(script.as_bytes(), &[0x00u8][..]);
        // explicit encoding of a small int
        let script = Builder::new().push_scriptint(4).into_script();
        assert_eq!(script.as_bytes(), &[0x01u8, 0x04][..]);
        // big ints
        let script = Builder::new().push_int(486604799).into_script();
        assert_eq!(script.as_bytes(), &[0x04u8, 0xff, 0xff, 0x00, 0x1d][..]);
        let script = Builder::new().push_int(-1000).into_script();
        assert_eq!(script.as_bytes(), &[0x02u8, 0xe8, 0x83][..]);
        let script = Builder::new().push_int(128).into_script();
        assert_eq!(script.as_bytes(), &[0x02u8, 0x80, 0x00][..]);
        // data
        let script = Builder::new().push_slice(b"WMP").push_opcode(opcodes::all::OP_CHECKSIG).into_script();
        assert_eq!(script.as_bytes(), &[0x03u8, b'W', b'M', b'P', 0xac][..]);
        let script = Builder::new().push_slice(&[0u8; 80]).into_script();
        assert_eq!(&script.as_bytes()[..2], &[0x4cu8, 80][..]);
        assert_eq!(script.len(), 82);
        let script = Builder::new().push_slice(&[0u8; 300]).into_script();
        assert_eq!(&script.as_bytes()[..3], &[0x4du8, 0x2c, 0x01][..]);
    }

    #[test]
    fn script_serialize() {
        let script = Builder::new().push_slice(&[0xaa; 3]).into_script();
        assert_eq!(serialize(&script), vec![4u8, 3, 0xaa, 0xaa, 0xaa]);
        assert_eq!(serialize(&Script::new()), vec![0u8]);
        assert_eq!(format!("{:x}", script), "03aaaaaa");
    }
}
