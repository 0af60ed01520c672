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

//! Transaction messages accepted by the AIGen DAO ledger.

use parity_scale_codec::{Decode, Encode};

use crate::{AccountId, Address, Balance, ContentId, ContractAddress, String128};

/// Deploy a reward token with a fixed supply.
///
/// The entire supply is credited to `initial_holder`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeployRewardToken {
    pub name: String128,
    pub symbol: String128,
    pub initial_holder: AccountId,
    pub initial_supply: Balance,
}

/// Deploy a DAO contract wired to an already deployed reward token.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeployDao {
    pub reward_token: ContractAddress,
}

/// Move tokens from the author's address to `recipient`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub token: ContractAddress,
    pub recipient: Address,
    pub amount: Balance,
}

/// Register a content entry with a DAO.
///
/// The new entry is assigned the next sequential [ContentId] of the DAO.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateContent {
    pub dao: ContractAddress,
    pub prompt: String128,
    pub ai_model: String128,
    pub content_hash: String128,
}

/// Vote on a single content entry.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub dao: ContractAddress,
    pub content_id: ContentId,
}

/// Vote on multiple content entries atomically.
///
/// Either every id receives a vote or, if any id does not exist, none does.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct BatchVote {
    pub dao: ContractAddress,
    pub content_ids: Vec<ContentId>,
}

/// Convert the author's pending reputation into their score and pay out the associated
/// reward tokens from the DAO treasury.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ClaimReputationRewards {
    pub dao: ContractAddress,
}

/// Union of all messages, as carried inside a signed transaction.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Call {
    DeployRewardToken(DeployRewardToken),
    DeployDao(DeployDao),
    Transfer(Transfer),
    CreateContent(CreateContent),
    Vote(Vote),
    BatchVote(BatchVote),
    ClaimReputationRewards(ClaimReputationRewards),
}

impl From<DeployRewardToken> for Call {
    fn from(message: DeployRewardToken) -> Self {
        Call::DeployRewardToken(message)
    }
}

impl From<DeployDao> for Call {
    fn from(message: DeployDao) -> Self {
        Call::DeployDao(message)
    }
}

impl From<Transfer> for Call {
    fn from(message: Transfer) -> Self {
        Call::Transfer(message)
    }
}

impl From<CreateContent> for Call {
    fn from(message: CreateContent) -> Self {
        Call::CreateContent(message)
    }
}

impl From<Vote> for Call {
    fn from(message: Vote) -> Self {
        Call::Vote(message)
    }
}

impl From<BatchVote> for Call {
    fn from(message: BatchVote) -> Self {
        Call::BatchVote(message)
    }
}

impl From<ClaimReputationRewards> for Call {
    fn from(message: ClaimReputationRewards) -> Self {
        Call::ClaimReputationRewards(message)
    }
}
