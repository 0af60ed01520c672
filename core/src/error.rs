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

use parity_scale_codec::{Decode, Encode};

/// Errors describing failed ledger transactions.
///
/// A transaction that produces one of these is included in a block but has no effect on
/// the ledger state beyond consuming the author's nonce.
#[derive(Encode, Decode, Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("The referenced contract does not exist")]
    InexistentContract,
    #[error("The referenced contract is not a reward token")]
    NotAToken,
    #[error("The referenced contract is not a DAO")]
    NotADao,
    #[error("The referenced content entry does not exist")]
    InexistentContent,
    #[error("The sender balance is insufficient for the transfer")]
    InsufficientBalance,
    #[error("No reputation reward is pending for the claiming account")]
    NoPendingReward,
}
