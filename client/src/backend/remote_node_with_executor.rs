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

//! Provides [RemoteNodeWithExecutor], a [RemoteNode] backend with an owned executor.

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::backend::{self, Backend, RemoteNode};
use crate::interface::*;

/// An adapter for [RemoteNode] that runs all futures on an owned tokio runtime.
///
/// The RPC transport of [RemoteNode] must be driven by a tokio reactor. Owning the
/// runtime makes the backend usable from any async context.
pub struct RemoteNodeWithExecutor {
    remote_node: RemoteNode,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl RemoteNodeWithExecutor {
    pub async fn create(host: url::Host) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Other(format!("failed to start executor: {}", e)))?;
        let remote_node = join(runtime.spawn(RemoteNode::create(host))).await?;
        Ok(RemoteNodeWithExecutor {
            remote_node,
            runtime: Arc::new(runtime),
        })
    }

    /// Run the future produced by `f` on the owned runtime and wait for the result.
    fn run<T, F>(&self, f: impl FnOnce(RemoteNode) -> F) -> impl Future<Output = Result<T, Error>>
    where
        F: Future<Output = Result<T, Error>> + Send + 'static,
        T: Send + 'static,
    {
        join(self.runtime.spawn(f(self.remote_node.clone())))
    }
}

/// Wait for a spawned task, turning a panicked or cancelled task into an [Error].
async fn join<T>(handle: tokio::task::JoinHandle<Result<T, Error>>) -> Result<T, Error> {
    match handle.await {
        Ok(result) => result,
        Err(join_error) => Err(Error::Other(format!("executor task failed: {}", join_error))),
    }
}

#[async_trait::async_trait]
impl Backend for RemoteNodeWithExecutor {
    async fn submit(
        &self,
        xt: backend::SignedTransaction,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        // Submission and inclusion both run on the owned runtime; the returned future
        // only joins the spawned task.
        let handle = self.runtime.spawn({
            let remote_node = self.remote_node.clone();
            async move {
                let included_fut = remote_node.submit(xt).await?;
                included_fut.await
            }
        });
        Ok(Box::pin(join(handle)))
    }

    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error> {
        let account_id = *account_id;
        self.run(move |node| async move { node.account_nonce(&account_id).await })
            .await
    }

    async fn block_header(&self, block_hash: Option<BlockHash>) -> Result<BlockHeader, Error> {
        self.run(move |node| async move { node.block_header(block_hash).await })
            .await
    }

    fn get_genesis_hash(&self) -> Hash {
        self.remote_node.get_genesis_hash()
    }

    async fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, Error> {
        self.run(move |node| async move { node.get_content(dao, content_id).await })
            .await
    }

    async fn content_count(&self, dao: ContractAddress) -> Result<u64, Error> {
        self.run(move |node| async move { node.content_count(dao).await })
            .await
    }

    async fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, Error> {
        let account_id = *account_id;
        self.run(move |node| async move { node.creator_reputation(dao, &account_id).await })
            .await
    }

    async fn token_balance(
        &self,
        token: ContractAddress,
        holder: &Address,
    ) -> Result<Balance, Error> {
        let holder = *holder;
        self.run(move |node| async move { node.token_balance(token, &holder).await })
            .await
    }

    async fn token_metadata(
        &self,
        token: ContractAddress,
    ) -> Result<Option<state::TokenMetadata>, Error> {
        self.run(move |node| async move { node.token_metadata(token).await })
            .await
    }
}
