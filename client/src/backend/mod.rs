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

//! Define trait for client backends and provide emulator and remote node implementations
use futures::future::BoxFuture;

use crate::interface::*;

pub use crate::transaction::SignedTransaction;

mod emulator;
mod ledger;
mod remote_node;
mod remote_node_with_executor;
mod rpc;

pub use emulator::Emulator;
pub use remote_node::RemoteNode;
pub use remote_node_with_executor::RemoteNodeWithExecutor;

/// Indicator that a transaction has been included in a block and has run in the ledger.
///
/// Obtained after a transaction has been submitted and processed.
pub struct TransactionIncluded {
    pub tx_hash: TxHash,
    /// The hash of the block the transaction is included in.
    pub block: BlockHash,
    /// Events deposited by this transaction
    pub events: Vec<event::Event>,
}

/// Backend for talking to the ledger on a block chain.
///
/// The interface exposes the ledger's transaction and state query surface; the
/// [crate::ClientT] implementation adds signing and typed result extraction on top.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Submit a signed transaction to the ledger.
    ///
    /// Fails if the transaction is invalid. On success returns a future that resolves
    /// when the transaction has been included in a block.
    async fn submit(
        &self,
        xt: SignedTransaction,
    ) -> Result<BoxFuture<'static, Result<TransactionIncluded, Error>>, Error>;

    /// Fetch the next transaction index (nonce) of the given account.
    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error>;

    /// Fetch a block header. `None` fetches the header of the best chain tip.
    async fn block_header(&self, block_hash: Option<BlockHash>) -> Result<BlockHeader, Error>;

    /// Get the genesis hash of the blockchain. This must be obtained on backend creation.
    fn get_genesis_hash(&self) -> Hash;

    async fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, Error>;

    async fn content_count(&self, dao: ContractAddress) -> Result<u64, Error>;

    async fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, Error>;

    async fn token_balance(
        &self,
        token: ContractAddress,
        holder: &Address,
    ) -> Result<Balance, Error>;

    async fn token_metadata(
        &self,
        token: ContractAddress,
    ) -> Result<Option<state::TokenMetadata>, Error>;
}
