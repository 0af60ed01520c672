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

/// `String128` type, and its validation tests.
use parity_scale_codec::{Decode, Encode, Error as CodecError, Input};
use serde::Deserialize as _;

/// A [String] that is limited to 128 bytes in UTF-8 encoding.
///
/// Used for token names and symbols and for the text fields of a content entry.
///
/// ```rust
/// # use aigen_dao_core::String128;
/// assert!(String128::from_string("a prompt".to_string()).is_ok());
/// let long_string = "x".repeat(129);
/// assert!(String128::from_string(long_string).is_err());
/// ```
#[derive(Encode, Clone, Debug, Eq, PartialEq)]
pub struct String128(String);

impl String128 {
    /// Returns an error if [String::len] of the provided string is greater than 128.
    pub fn from_string(s: String) -> Result<Self, String> {
        if s.len() > 128 {
            Err(format!(
                "The provided string's length is {} while String128 is limited to 128 bytes",
                s.len()
            ))
        } else {
            Ok(String128(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String128> for String {
    fn from(s: String128) -> String {
        s.0
    }
}

impl core::str::FromStr for String128 {
    type Err = String;

    /// Returns an error if [String::len] of the provided string is greater than 128.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        String128::from_string(s.to_string())
    }
}

impl core::fmt::Display for String128 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Decode for String128 {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let decoded: String = String::decode(input)?;
        if decoded.len() > 128 {
            Err(From::from("String128 length was more than 128 bytes."))
        } else {
            Ok(String128(decoded))
        }
    }
}

impl serde::Serialize for String128 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for String128 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        String128::from_string(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn long_string128() {
        fn long_string(n: usize) -> Result<String128, String> {
            String128::from_string(std::iter::repeat("X").take(n).collect::<String>())
        }
        let wrong = long_string(129);
        let right = long_string(128);

        assert!(
            wrong.is_err(),
            "Error: excessively long string converted to String128"
        );
        assert!(
            right.is_ok(),
            "Error: string with acceptable length failed conversion to String128."
        )
    }

    #[test]
    fn decode_rejects_oversized_string() {
        let oversized = "X".repeat(129).encode();
        assert!(String128::decode(&mut &oversized[..]).is_err());

        let bounded = "A futuristic cityscape at sunset".to_string().encode();
        let decoded = String128::decode(&mut &bounded[..]).unwrap();
        assert_eq!(decoded.as_str(), "A futuristic cityscape at sunset");
    }
}
