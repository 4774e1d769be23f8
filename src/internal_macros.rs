// SPDX-License-Identifier: CC0-1.0

//! Internal macros
//!
//! Macros meant to be used inside the library only.
//!

/// Implements `Encodable` for a struct by encoding each listed field in order.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::encode::Encodable for $thing {
            #[inline]
            fn consensus_encode<S: ::std::io::Write>(
                &self,
                mut s: S,
            ) -> Result<usize, $crate::consensus::encode::Error> {
                let mut len = 0;
                $(len += $crate::consensus::encode::Encodable::consensus_encode(
                    &self.$field,
                    &mut s,
                )?;)+
                Ok(len)
            }
        }
    );
}

/// Implements a one-line accessor for each listed field.
macro_rules! impl_accessors {
    ($thing:ident, $($(#[$doc:meta])* $field:ident: $ty:ty),+ $(,)*) => (
        impl $thing {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $field(&self) -> $ty { self.$field }
            )+
        }
    );
}
