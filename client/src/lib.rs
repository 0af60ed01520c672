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

//! Clients for the AIGen DAO ledger.
//!
//! This crate provides a high-level client to interact with the AIGen DAO ledger. The
//! client implements [ClientT] for submitting transactions and reading state.
//! [Client::create_with_executor] talks to the RPC API of a devnet node.
//! [Client::new_emulator] runs the ledger in memory. This is useful for developing and
//! testing.

use std::sync::Arc;

pub mod backend;
mod error;
mod interface;
pub mod message;
mod transaction;

pub use crate::interface::*;
pub use crate::transaction::SignedTransaction;

/// Client to interact with the AIGen DAO ledger.
///
/// Implements [ClientT] for interacting with the ledger.
pub struct Client {
    backend: Arc<dyn backend::Backend>,
}

impl Client {
    /// Connects to a node running on the given host and returns a [Client].
    ///
    /// The RPC transport must be driven by a tokio reactor; see
    /// [Client::create_with_executor] for a client that owns one.
    ///
    /// Fails if it cannot connect to a node.
    pub async fn create(host: url::Host) -> Result<Self, Error> {
        let backend = backend::RemoteNode::create(host).await?;
        Ok(Self::new(backend))
    }

    /// Same as [Client::create] but the returned client runs the RPC transport on an
    /// owned executor so that it can be used from any async context.
    pub async fn create_with_executor(host: url::Host) -> Result<Self, Error> {
        let backend = backend::RemoteNodeWithExecutor::create(host).await?;
        Ok(Self::new(backend))
    }

    /// Create a client that runs the ledger in memory. See [backend::Emulator].
    pub fn new_emulator() -> Self {
        Self::new(backend::Emulator::new())
    }

    fn new(backend: impl backend::Backend + 'static) -> Self {
        Client {
            backend: Arc::new(backend),
        }
    }
}

#[async_trait::async_trait]
impl ClientT for Client {
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error> {
        let tx_hash = transaction.hash();
        let included_fut = self.backend.submit(transaction.signed).await?;
        Ok(Box::pin(async move {
            let included = included_fut.await?;
            let result = Message_::result_from_events(included.events.clone())
                .map_err(|error| Error::EventExtraction { error, tx_hash })?;
            Ok(TransactionIncluded {
                tx_hash,
                block: included.block,
                events: included.events,
                result,
            })
        }))
    }

    async fn sign_and_submit_message<Message_: Message>(
        &self,
        author: &crypto::Pair,
        message: Message_,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error> {
        let account_id = author.public();
        let nonce = self.backend.account_nonce(&account_id).await?;
        let transaction_extra = TransactionExtra {
            nonce,
            genesis_hash: self.backend.get_genesis_hash(),
        };
        let transaction = Transaction::new_signed(author, message, transaction_extra);
        self.submit_transaction(transaction).await
    }

    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error> {
        self.backend.account_nonce(account_id).await
    }

    async fn block_header(&self, block_hash: BlockHash) -> Result<BlockHeader, Error> {
        self.backend.block_header(Some(block_hash)).await
    }

    async fn block_header_best_chain(&self) -> Result<BlockHeader, Error> {
        self.backend.block_header(None).await
    }

    fn genesis_hash(&self) -> Hash {
        self.backend.get_genesis_hash()
    }

    async fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, Error> {
        self.backend.get_content(dao, content_id).await
    }

    async fn content_count(&self, dao: ContractAddress) -> Result<u64, Error> {
        self.backend.content_count(dao).await
    }

    async fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, Error> {
        self.backend.creator_reputation(dao, account_id).await
    }

    async fn token_balance(
        &self,
        token: ContractAddress,
        holder: &Address,
    ) -> Result<Balance, Error> {
        self.backend.token_balance(token, holder).await
    }

    async fn token_metadata(
        &self,
        token: ContractAddress,
    ) -> Result<Option<state::TokenMetadata>, Error> {
        self.backend.token_metadata(token).await
    }
}
