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

//! Provides [Emulator] backend to run the ledger in memory.

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::{self, ledger::Ledger};
use crate::interface::*;

/// [backend::Backend] implementation running the ledger in memory.
///
/// # Differences with a real backend
///
/// * Every [backend::Backend::submit] call creates a new block that only contains the
///   submitted transaction.
///
/// * Transactions are applied as soon as they are submitted, so the returned inclusion
///   future resolves immediately.
#[derive(Clone)]
pub struct Emulator {
    genesis_hash: Hash,
    state: Arc<Mutex<EmulatorState>>,
}

/// Mutable state of the emulator.
struct EmulatorState {
    ledger: Ledger,
    tip_header: BlockHeader,
    headers: HashMap<BlockHash, BlockHeader>,
}

impl Emulator {
    pub fn new() -> Self {
        let genesis_hash = Hash::of(&"aigen-dao-dev-chain");
        let tip_header = BlockHeader {
            parent_hash: Hash::zero(),
            number: 1,
        };
        let mut headers = HashMap::new();
        headers.insert(tip_header.hash(), tip_header.clone());

        Emulator {
            genesis_hash,
            state: Arc::new(Mutex::new(EmulatorState {
                ledger: Ledger::new(),
                tip_header,
                headers,
            })),
        }
    }
}

#[async_trait::async_trait]
impl backend::Backend for Emulator {
    async fn submit(
        &self,
        xt: backend::SignedTransaction,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        let tx_hash = xt.hash();
        let mut state = self.state.lock().unwrap();

        if xt.genesis_hash != self.genesis_hash
            || xt.nonce != state.ledger.account_nonce(&xt.author)
            || !xt.verify()
        {
            return Err(Error::InvalidTransaction);
        }

        log::debug!("emulator: applying transaction {}", tx_hash);
        let events = state.ledger.apply(&xt);

        let new_tip_header = BlockHeader {
            parent_hash: state.tip_header.hash(),
            number: state.tip_header.number + 1,
        };
        let new_tip_hash = new_tip_header.hash();
        state.tip_header = new_tip_header.clone();
        state.headers.insert(new_tip_hash, new_tip_header);

        Ok(Box::pin(futures::future::ready(Ok(
            backend::TransactionIncluded {
                tx_hash,
                block: new_tip_hash,
                events,
            },
        ))))
    }

    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error> {
        let state = self.state.lock().unwrap();
        Ok(state.ledger.account_nonce(account_id))
    }

    async fn block_header(&self, block_hash_opt: Option<BlockHash>) -> Result<BlockHeader, Error> {
        let state = self.state.lock().unwrap();
        let block_hash = match block_hash_opt {
            Some(block_hash) => block_hash,
            None => return Ok(state.tip_header.clone()),
        };
        state
            .headers
            .get(&block_hash)
            .cloned()
            .ok_or_else(|| format!("No block header found for hash {}", block_hash).into())
    }

    fn get_genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    async fn get_content(
        &self,
        dao: ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, Error> {
        let state = self.state.lock().unwrap();
        state
            .ledger
            .get_content(&dao, content_id)
            .map_err(ledger_query_error)
    }

    async fn content_count(&self, dao: ContractAddress) -> Result<u64, Error> {
        let state = self.state.lock().unwrap();
        state.ledger.content_count(&dao).map_err(ledger_query_error)
    }

    async fn creator_reputation(
        &self,
        dao: ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, Error> {
        let state = self.state.lock().unwrap();
        state
            .ledger
            .creator_reputation(&dao, account_id)
            .map_err(ledger_query_error)
    }

    async fn token_balance(
        &self,
        token: ContractAddress,
        holder: &Address,
    ) -> Result<Balance, Error> {
        let state = self.state.lock().unwrap();
        state
            .ledger
            .token_balance(&token, holder)
            .map_err(ledger_query_error)
    }

    async fn token_metadata(
        &self,
        token: ContractAddress,
    ) -> Result<Option<state::TokenMetadata>, Error> {
        let state = self.state.lock().unwrap();
        Ok(state.ledger.token_metadata(&token))
    }
}

fn ledger_query_error(error: LedgerError) -> Error {
    Error::Other(format!("ledger query failed: {}", error))
}
