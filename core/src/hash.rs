// AIGen DAO
// Copyright (C) 2025 AIGen DAO Developers <dev@aigendao.org>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! 32 byte BLAKE3 hashes identifying blocks, transactions and contract instances.

use parity_scale_codec::{Decode, Encode};
use serde::Deserialize as _;

/// A 32 byte BLAKE3 hash.
///
/// Displayed and parsed as a `0x` prefixed hex string.
#[derive(Encode, Decode, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The all-zero hash.
    pub fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Hash the SCALE encoding of the given value.
    pub fn of<T: Encode>(value: &T) -> Self {
        Hash(*blake3::hash(&value.encode()).as_bytes())
    }

    pub fn random() -> Self {
        Hash(rand::random())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl core::fmt::Display for Hash {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl core::fmt::Debug for Hash {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl core::str::FromStr for Hash {
    type Err = String;

    /// Parse a hex string, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_data = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(hex_data).map_err(|e| format!("invalid hex string: {}", e))?;
        if bytes.len() != 32 {
            return Err(format!("expected 32 bytes, got {}", bytes.len()));
        }
        let mut data = [0u8; 32];
        data.copy_from_slice(&bytes);
        Ok(Hash(data))
    }
}

impl serde::Serialize for Hash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_then_parse() {
        let hash = Hash::random();
        let parsed = hash.to_string().parse::<Hash>().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn parse_without_prefix() {
        let hash = Hash::zero();
        let parsed = hex::encode(hash.0).parse::<Hash>().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn parse_wrong_length() {
        assert!("0xab".parse::<Hash>().is_err());
        assert!("not hex".parse::<Hash>().is_err());
    }

    #[test]
    fn hash_of_is_deterministic() {
        assert_eq!(Hash::of(&42u64), Hash::of(&42u64));
        assert_ne!(Hash::of(&42u64), Hash::of(&43u64));
    }
}
