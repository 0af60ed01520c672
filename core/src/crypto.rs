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

//! Ed25519 key pairs and signatures used to author ledger transactions.

use ed25519_dalek::Signer as _;
use parity_scale_codec::{Decode, Encode};
use serde::Deserialize as _;

use crate::{Address, Hash};

/// An Ed25519 public key identifying a transaction author.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// The ledger address under which this account holds token balances.
    pub fn address(&self) -> Address {
        Hash(self.0)
    }

    /// Verify a detached signature over `message` against this key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let key = match ed25519_dalek::VerifyingKey::from_bytes(&self.0) {
            Ok(key) => key,
            Err(_) => return false,
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
        key.verify_strict(message, &signature).is_ok()
    }
}

impl core::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl core::str::FromStr for PublicKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hash: Hash = s.parse()?;
        Ok(PublicKey(hash.0))
    }
}

impl serde::Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A detached Ed25519 signature.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Signature(0x{})", hex::encode(&self.0[..]))
    }
}

/// Key pair used to author transactions.
#[derive(Clone)]
pub struct Pair {
    signing: ed25519_dalek::SigningKey,
}

impl Pair {
    /// Derive a key pair from a development seed string such as `//Alice`.
    ///
    /// The seed material is the BLAKE3 hash of the string following the `//` prefix, so
    /// equal seed strings always derive the same key pair.
    pub fn from_string(s: &str) -> Result<Self, String> {
        let seed = s
            .strip_prefix("//")
            .ok_or_else(|| format!("invalid key seed {:?}: expected a \"//Seed\" string", s))?;
        Ok(Self::from_seed(blake3::hash(seed.as_bytes()).as_bytes()))
    }

    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Pair {
            signing: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// Generate a key pair from random seed material.
    pub fn generate() -> Self {
        Self::from_seed(&rand::random())
    }

    pub fn public(&self) -> PublicKey {
        PublicKey(self.signing.verifying_key().to_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing.sign(message).to_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sign_and_verify() {
        let pair = Pair::generate();
        let signature = pair.sign(b"some message");
        assert!(pair.public().verify(b"some message", &signature));
        assert!(!pair.public().verify(b"another message", &signature));
    }

    #[test]
    fn verify_rejects_foreign_key() {
        let pair = Pair::generate();
        let other = Pair::generate();
        let signature = pair.sign(b"some message");
        assert!(!other.public().verify(b"some message", &signature));
    }

    #[test]
    fn seed_string_derivation() {
        let alice = Pair::from_string("//Alice").unwrap();
        let alice_again = Pair::from_string("//Alice").unwrap();
        let bob = Pair::from_string("//Bob").unwrap();
        assert_eq!(alice.public(), alice_again.public());
        assert_ne!(alice.public(), bob.public());
    }

    #[test]
    fn seed_string_requires_prefix() {
        assert!(Pair::from_string("Alice").is_err());
    }
}
