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

//! Typed JSON-RPC interface exposed by an AIGen DAO devnet node.

use jsonrpc_core::Result as RpcResult;
use jsonrpc_derive::rpc;
use serde::{Deserialize, Serialize};

use crate::interface::*;

/// Hex-encoded SCALE bytes carried over the RPC boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bytes(pub Vec<u8>);

impl Serialize for Bytes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(&self.0)))
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let hex_data = s.strip_prefix("0x").unwrap_or(&s);
        hex::decode(hex_data)
            .map(Bytes)
            .map_err(serde::de::Error::custom)
    }
}

/// Wire form of [crate::backend::TransactionIncluded].
///
/// `events` is the SCALE encoding of the `Vec<event::Event>` deposited by the
/// transaction.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransactionIncludedRpc {
    pub tx_hash: TxHash,
    pub block: BlockHash,
    pub events: Bytes,
}

/// The RPC methods of a devnet node, one per [crate::backend::Backend] operation.
#[rpc(client)]
pub trait NodeRpc {
    /// Submit a SCALE-encoded signed transaction, returning once it has been included in
    /// a block.
    #[rpc(name = "author_submitExtrinsic")]
    fn submit_extrinsic(&self, xt: Bytes) -> RpcResult<TransactionIncludedRpc>;

    #[rpc(name = "chain_genesisHash")]
    fn genesis_hash(&self) -> RpcResult<Hash>;

    #[rpc(name = "chain_blockHeader")]
    fn block_header(&self, block_hash: Option<BlockHash>) -> RpcResult<BlockHeader>;

    #[rpc(name = "system_accountNonce")]
    fn account_nonce(&self, account_id: AccountId)
        -> RpcResult<state::AccountTransactionIndex>;

    #[rpc(name = "state_getContent")]
    fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> RpcResult<Option<state::Content>>;

    #[rpc(name = "state_contentCount")]
    fn content_count(&self, dao: ContractAddress) -> RpcResult<u64>;

    #[rpc(name = "state_creatorReputation")]
    fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: AccountId,
    ) -> RpcResult<Reputation>;

    #[rpc(name = "state_tokenBalance")]
    fn token_balance(&self, token: ContractAddress, holder: Address) -> RpcResult<Balance>;

    #[rpc(name = "state_tokenMetadata")]
    fn token_metadata(&self, token: ContractAddress) -> RpcResult<Option<state::TokenMetadata>>;
}
