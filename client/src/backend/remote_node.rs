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

//! [backend::Backend] implementation for a remote devnet node.

use futures::future::BoxFuture;
use parity_scale_codec::{Decode as _, Encode as _};

use crate::backend::rpc::{self, Bytes};
use crate::backend::{self, Backend};
use crate::interface::*;

/// Default port of the node's JSON-RPC API.
const RPC_PORT: u16 = 9933;

/// Backend that talks to the JSON-RPC API of a devnet node.
///
/// The RPC transport is driven by a tokio reactor, so all methods must be called from
/// within a tokio runtime. Use [super::RemoteNodeWithExecutor] when no such runtime is at
/// hand.
#[derive(Clone)]
pub struct RemoteNode {
    rpc: rpc::NodeRpcClient,
    genesis_hash: Hash,
}

impl RemoteNode {
    /// Connect to the RPC API of a node running on the given host.
    ///
    /// Fails if the node cannot be reached.
    pub async fn create(host: url::Host) -> Result<Self, Error> {
        let url = format!("http://{}:{}", host, RPC_PORT);
        log::debug!("connecting to node RPC at {}", url);
        let rpc: rpc::NodeRpcClient =
            jsonrpc_core_client::transports::http::connect(&url).await?;
        let genesis_hash = rpc.genesis_hash().await?;
        Ok(RemoteNode { rpc, genesis_hash })
    }
}

#[async_trait::async_trait]
impl Backend for RemoteNode {
    async fn submit(
        &self,
        xt: backend::SignedTransaction,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        let rpc = self.rpc.clone();
        let encoded = Bytes(xt.encode());
        Ok(Box::pin(async move {
            let included = rpc.submit_extrinsic(encoded).await?;
            let events = Vec::<event::Event>::decode(&mut &included.events.0[..])?;
            Ok(backend::TransactionIncluded {
                tx_hash: included.tx_hash,
                block: included.block,
                events,
            })
        }))
    }

    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error> {
        Ok(self.rpc.account_nonce(*account_id).await?)
    }

    async fn block_header(&self, block_hash: Option<BlockHash>) -> Result<BlockHeader, Error> {
        Ok(self.rpc.block_header(block_hash).await?)
    }

    fn get_genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    async fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, Error> {
        Ok(self.rpc.get_content(dao, content_id).await?)
    }

    async fn content_count(&self, dao: ContractAddress) -> Result<u64, Error> {
        Ok(self.rpc.content_count(dao).await?)
    }

    async fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, Error> {
        Ok(self.rpc.creator_reputation(dao, *account_id).await?)
    }

    async fn token_balance(
        &self,
        token: ContractAddress,
        holder: &Address,
    ) -> Result<Balance, Error> {
        Ok(self.rpc.token_balance(token, *holder).await?)
    }

    async fn token_metadata(
        &self,
        token: ContractAddress,
    ) -> Result<Option<state::TokenMetadata>, Error> {
        Ok(self.rpc.token_metadata(token).await?)
    }
}
