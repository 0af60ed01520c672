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

//! Events deposited by the ledger when transactions are applied.
//!
//! Every applied transaction deposits a [System] event carrying the dispatch outcome;
//! successful transactions additionally deposit the domain events describing their
//! effect.

use parity_scale_codec::{Decode, Encode};

use crate::{
    AccountId, Address, Balance, ContentId, ContractAddress, LedgerError, Reputation,
};

/// A ledger event deposited while applying a transaction.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    System(System),
    Token(Token),
    Dao(Dao),
}

/// Events of the transaction dispatch machinery itself.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum System {
    ExtrinsicSuccess,
    ExtrinsicFailed(LedgerError),
}

/// Events deposited by reward token contracts.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A reward token was deployed at the given address.
    Deployed(ContractAddress),
    /// Tokens moved between two holders: `(token, from, to, amount)`.
    Transferred(ContractAddress, Address, Address, Balance),
}

/// Events deposited by DAO contracts.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Dao {
    /// A DAO contract was deployed at the given address.
    Deployed(ContractAddress),
    /// A content entry was registered: `(dao, id, creator)`.
    ContentCreated(ContractAddress, ContentId, AccountId),
    /// A vote was cast on a content entry: `(dao, id, voter)`.
    Voted(ContractAddress, ContentId, AccountId),
    /// Votes were cast on multiple content entries atomically: `(dao, ids, voter)`.
    BatchVoted(ContractAddress, Vec<ContentId>, AccountId),
    /// Pending reputation was claimed: `(dao, account, new_score, payout)`.
    ReputationClaimed(ContractAddress, AccountId, Reputation, Balance),
}

impl From<System> for Event {
    fn from(event: System) -> Self {
        Event::System(event)
    }
}

impl From<Token> for Event {
    fn from(event: Token) -> Self {
        Event::Token(event)
    }
}

impl From<Dao> for Event {
    fn from(event: Dao) -> Self {
        Event::Dao(event)
    }
}
