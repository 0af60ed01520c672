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

//! Basic types used in the AIGen DAO ledger.

pub mod amount;
pub mod crypto;
pub mod event;
pub mod message;
pub mod state;

mod block;
pub use block::{BlockHeader, BlockNumber};

mod error;
pub use error::LedgerError;

mod hash;
pub use hash::Hash;

mod string128;
pub use string128::String128;

/// Identifier for accounts, an Ed25519 public key.
///
/// Each account has an associated [state::AccountTransactionIndex] and may hold token
/// balances under [crypto::PublicKey::address].
pub type AccountId = crypto::PublicKey;

/// Address of a token holder on the ledger.
///
/// An account holds tokens under its public key bytes, a deployed contract under the
/// address assigned at deployment.
pub type Address = Hash;

/// Address of a deployed contract instance.
pub type ContractAddress = Address;

/// Balance in the reward token's native fixed-point representation.
///
/// See [amount] for conversions from and to whole token units.
pub type Balance = u128;

/// Identifier of a content entry.
///
/// Assigned sequentially by each DAO contract, starting at zero.
pub type ContentId = u64;

/// Reputation score accumulated by a content creator.
///
/// Increased by [message::ClaimReputationRewards], never decreased.
pub type Reputation = u64;
