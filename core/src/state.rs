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

//! Type definitions for the entities stored in the ledger state.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Balance, String128};

/// A content entry registered with a DAO contract.
///
/// # Storage
///
/// Content entries are stored per DAO instance, indexed by their [crate::ContentId],
/// which is assigned sequentially at creation time.
///
/// # Invariants
///
/// * `prompt`, `ai_model`, `content_hash` and `creator` are immutable.
/// * `votes` only ever increases.
///
/// # Relevant messages
///
/// * [crate::message::CreateContent]
/// * [crate::message::Vote]
/// * [crate::message::BatchVote]
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Content {
    /// The prompt the content was generated from.
    pub prompt: String128,
    /// Label of the AI model that generated the content.
    pub ai_model: String128,
    /// Hash string locating the content data off-chain.
    pub content_hash: String128,
    /// Number of votes received so far.
    pub votes: u64,
    /// The account that registered the entry.
    pub creator: AccountId,
}

/// Write-once metadata of a deployed reward token.
///
/// Set by [crate::message::DeployRewardToken] and never changed afterwards.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String128,
    pub symbol: String128,
    pub total_supply: Balance,
}

/// Next index (nonce) for a transaction of an account.
///
/// The index for an [crate::AccountId] increases whenever a transaction by the account
/// owner is applied.
pub type AccountTransactionIndex = u32;
