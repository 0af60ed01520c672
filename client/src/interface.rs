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

//! Provide an abstract trait for the ledger client and the necessary types.
//!
//! The [ClientT] trait defines one method for each transaction of the ledger as well as
//! methods to get the ledger state.
use futures::future::BoxFuture;

pub use aigen_dao_core::*;

pub use crate::error::Error;
pub use crate::message::Message;
pub use crate::transaction::{Transaction, TransactionExtra};

/// The hash of a block. Uniquely identifies a block.
#[doc(inline)]
pub type BlockHash = Hash;

/// The hash of a transaction. Uniquely identifies a transaction.
#[doc(inline)]
pub type TxHash = Hash;

/// Result of a transaction being included in a block.
///
/// Returned after submitting a transaction to the ledger.
#[derive(Clone, Debug)]
pub struct TransactionIncluded<Message_: Message> {
    pub tx_hash: TxHash,
    /// The hash of the block the transaction is included in.
    pub block: BlockHash,
    /// Events deposited by this transaction
    pub events: Vec<event::Event>,
    /// The result of the ledger message.
    ///
    /// See [Message::result_from_events].
    pub result: Result<Message_::Output, LedgerError>,
}

/// Return type for all [ClientT] methods.
pub type Response<T, Error> = BoxFuture<'static, Result<T, Error>>;

/// Trait for ledger clients sending transactions and looking up state.
#[async_trait::async_trait]
pub trait ClientT {
    /// Submit a signed transaction.
    ///
    /// ```no_run
    /// # use aigen_dao_client::*;
    /// # async fn example<M: Message>(client: Client, tx: Transaction<M>) -> Result<(), Error> {
    ///
    /// // Submit the transaction to the ledger.
    /// //
    /// // This call fails if the transaction is invalid or if the RPC communication with
    /// // the node failed.
    /// let tx_included_fut = client.submit_transaction(tx).await?;
    ///
    /// // We can now wait for the transaction to be included in a block.
    /// //
    /// // This will not error if the transaction errored while applying. See
    /// // [TransactionIncluded::result] for that.
    /// let tx_included = tx_included_fut.await?;
    ///
    /// Ok(())
    /// # }
    /// ```
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error>;

    /// Sign and submit a ledger message as a transaction to the ledger.
    ///
    /// Same as [ClientT::submit_transaction] but takes care of fetching the nonce and
    /// signing the message.
    async fn sign_and_submit_message<Message_: Message>(
        &self,
        author: &crypto::Pair,
        message: Message_,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error>;

    /// Fetch the nonce for the given account from the chain state
    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error>;

    /// Fetch the header of the given block hash
    async fn block_header(&self, block_hash: BlockHash) -> Result<BlockHeader, Error>;

    /// Fetch the header of the best chain tip
    async fn block_header_best_chain(&self) -> Result<BlockHeader, Error>;

    /// Return the genesis hash of the chain we are communicating with.
    fn genesis_hash(&self) -> Hash;

    /// Fetch a content entry of the given DAO.
    ///
    /// Returns `None` if no entry with this id exists.
    async fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, Error>;

    /// Number of content entries registered with the given DAO.
    ///
    /// Entry ids are sequential, so all ids below the count are valid.
    async fn content_count(&self, dao: ContractAddress) -> Result<u64, Error>;

    /// Fetch the reputation score of an account with the given DAO.
    async fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, Error>;

    /// Fetch the token balance held by `holder` in the given reward token.
    async fn token_balance(
        &self,
        token: ContractAddress,
        holder: &Address,
    ) -> Result<Balance, Error>;

    /// Fetch the metadata of a deployed reward token.
    ///
    /// Returns `None` if no token is deployed at the address.
    async fn token_metadata(
        &self,
        token: ContractAddress,
    ) -> Result<Option<state::TokenMetadata>, Error>;
}
