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

//! In-memory ledger state and transaction semantics used by [super::Emulator].

use std::collections::HashMap;

use crate::backend::SignedTransaction;
use crate::interface::*;
use aigen_dao_core::message::Call;

/// Whole tokens paid out from the DAO treasury per claimed reputation point.
///
/// Chain parameter; a node operator's genesis configuration may choose differently.
pub const REWARD_PER_REPUTATION_POINT: Balance = amount::from_whole(10);

/// Reputation points a creator accrues for each vote on their content.
///
/// Chain parameter; a node operator's genesis configuration may choose differently.
pub const REPUTATION_PER_VOTE: u64 = 1;

/// The full ledger state with the transaction semantics applied by [Ledger::apply].
pub struct Ledger {
    nonces: HashMap<AccountId, state::AccountTransactionIndex>,
    tokens: HashMap<ContractAddress, TokenState>,
    daos: HashMap<ContractAddress, DaoState>,
    /// Counts deployments to derive fresh contract addresses.
    deployments: u64,
}

struct TokenState {
    metadata: state::TokenMetadata,
    balances: HashMap<Address, Balance>,
}

struct DaoState {
    reward_token: ContractAddress,
    contents: Vec<state::Content>,
    creators: HashMap<AccountId, CreatorState>,
}

#[derive(Default)]
struct CreatorState {
    reputation: Reputation,
    /// Reputation points accrued from votes since the last claim.
    pending: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            nonces: HashMap::new(),
            tokens: HashMap::new(),
            daos: HashMap::new(),
            deployments: 0,
        }
    }

    pub fn account_nonce(&self, account_id: &AccountId) -> state::AccountTransactionIndex {
        self.nonces.get(account_id).copied().unwrap_or(0)
    }

    /// Apply a validated transaction and return the events it deposits.
    ///
    /// The author's nonce is consumed whether or not the call succeeds. A failed call
    /// deposits only [event::System::ExtrinsicFailed] and leaves the rest of the state
    /// untouched.
    pub fn apply(&mut self, xt: &SignedTransaction) -> Vec<event::Event> {
        *self.nonces.entry(xt.author).or_insert(0) += 1;
        match self.dispatch(xt.author, xt.call.clone()) {
            Ok(mut events) => {
                events.push(event::System::ExtrinsicSuccess.into());
                events
            }
            Err(error) => vec![event::System::ExtrinsicFailed(error).into()],
        }
    }

    fn dispatch(
        &mut self,
        author: AccountId,
        call: Call,
    ) -> Result<Vec<event::Event>, LedgerError> {
        match call {
            Call::DeployRewardToken(message) => self.deploy_reward_token(author, message),
            Call::DeployDao(message) => self.deploy_dao(author, message),
            Call::Transfer(message) => self.transfer(author, message),
            Call::CreateContent(message) => self.create_content(author, message),
            Call::Vote(message) => self.vote(author, message),
            Call::BatchVote(message) => self.batch_vote(author, message),
            Call::ClaimReputationRewards(message) => self.claim_reputation_rewards(author, message),
        }
    }

    fn deploy_reward_token(
        &mut self,
        author: AccountId,
        message: message::DeployRewardToken,
    ) -> Result<Vec<event::Event>, LedgerError> {
        let address = self.next_contract_address(&author);
        let mut balances = HashMap::new();
        balances.insert(message.initial_holder.address(), message.initial_supply);
        self.tokens.insert(
            address,
            TokenState {
                metadata: state::TokenMetadata {
                    name: message.name,
                    symbol: message.symbol,
                    total_supply: message.initial_supply,
                },
                balances,
            },
        );
        Ok(vec![event::Token::Deployed(address).into()])
    }

    fn deploy_dao(
        &mut self,
        author: AccountId,
        message: message::DeployDao,
    ) -> Result<Vec<event::Event>, LedgerError> {
        if !self.tokens.contains_key(&message.reward_token) {
            if self.daos.contains_key(&message.reward_token) {
                return Err(LedgerError::NotAToken);
            }
            return Err(LedgerError::InexistentContract);
        }
        let address = self.next_contract_address(&author);
        self.daos.insert(
            address,
            DaoState {
                reward_token: message.reward_token,
                contents: Vec::new(),
                creators: HashMap::new(),
            },
        );
        Ok(vec![event::Dao::Deployed(address).into()])
    }

    fn transfer(
        &mut self,
        author: AccountId,
        message: message::Transfer,
    ) -> Result<Vec<event::Event>, LedgerError> {
        let sender = author.address();
        let token = self.token_mut(&message.token)?;
        let sender_balance = token.balances.get(&sender).copied().unwrap_or(0);
        if sender_balance < message.amount {
            return Err(LedgerError::InsufficientBalance);
        }
        token.balances.insert(sender, sender_balance - message.amount);
        *token.balances.entry(message.recipient).or_insert(0) += message.amount;
        Ok(vec![event::Token::Transferred(
            message.token,
            sender,
            message.recipient,
            message.amount,
        )
        .into()])
    }

    fn create_content(
        &mut self,
        author: AccountId,
        message: message::CreateContent,
    ) -> Result<Vec<event::Event>, LedgerError> {
        let dao_address = message.dao;
        let dao = self.dao_mut(&dao_address)?;
        let content_id = dao.contents.len() as ContentId;
        dao.contents.push(state::Content {
            prompt: message.prompt,
            ai_model: message.ai_model,
            content_hash: message.content_hash,
            votes: 0,
            creator: author,
        });
        Ok(vec![
            event::Dao::ContentCreated(dao_address, content_id, author).into()
        ])
    }

    fn vote(
        &mut self,
        author: AccountId,
        message: message::Vote,
    ) -> Result<Vec<event::Event>, LedgerError> {
        let dao = self.dao_mut(&message.dao)?;
        dao.apply_vote(message.content_id)?;
        Ok(vec![
            event::Dao::Voted(message.dao, message.content_id, author).into()
        ])
    }

    fn batch_vote(
        &mut self,
        author: AccountId,
        message: message::BatchVote,
    ) -> Result<Vec<event::Event>, LedgerError> {
        let dao = self.dao_mut(&message.dao)?;
        // Validate the whole batch before applying any vote.
        for content_id in &message.content_ids {
            if *content_id >= dao.contents.len() as ContentId {
                return Err(LedgerError::InexistentContent);
            }
        }
        for content_id in &message.content_ids {
            dao.apply_vote(*content_id)?;
        }
        Ok(vec![
            event::Dao::BatchVoted(message.dao, message.content_ids, author).into()
        ])
    }

    fn claim_reputation_rewards(
        &mut self,
        author: AccountId,
        message: message::ClaimReputationRewards,
    ) -> Result<Vec<event::Event>, LedgerError> {
        let dao_address = message.dao;
        let dao = self.dao(&dao_address)?;
        let reward_token = dao.reward_token;
        let pending = dao
            .creators
            .get(&author)
            .map(|creator| creator.pending)
            .unwrap_or(0);
        if pending == 0 {
            return Err(LedgerError::NoPendingReward);
        }
        let payout = Balance::from(pending) * REWARD_PER_REPUTATION_POINT;

        // Move the payout from the DAO treasury before updating the score, so a failed
        // transfer leaves the pending points claimable.
        let token = self
            .tokens
            .get_mut(&reward_token)
            .ok_or(LedgerError::InexistentContract)?;
        let treasury = token.balances.get(&dao_address).copied().unwrap_or(0);
        if treasury < payout {
            return Err(LedgerError::InsufficientBalance);
        }
        token.balances.insert(dao_address, treasury - payout);
        *token.balances.entry(author.address()).or_insert(0) += payout;

        let creator = self
            .daos
            .get_mut(&dao_address)
            .expect("DAO existence checked above")
            .creators
            .get_mut(&author)
            .expect("creator existence checked above");
        creator.reputation += pending;
        creator.pending = 0;
        let new_score = creator.reputation;

        Ok(vec![
            event::Token::Transferred(reward_token, dao_address, author.address(), payout).into(),
            event::Dao::ReputationClaimed(dao_address, author, new_score, payout).into(),
        ])
    }

    pub fn get_content(
        &self,
        dao: &ContractAddress,
        content_id: ContentId,
    ) -> Result<Option<state::Content>, LedgerError> {
        Ok(self.dao(dao)?.contents.get(content_id as usize).cloned())
    }

    pub fn content_count(&self, dao: &ContractAddress) -> Result<u64, LedgerError> {
        Ok(self.dao(dao)?.contents.len() as u64)
    }

    pub fn creator_reputation(
        &self,
        dao: &ContractAddress,
        account_id: &AccountId,
    ) -> Result<Reputation, LedgerError> {
        Ok(self
            .dao(dao)?
            .creators
            .get(account_id)
            .map(|creator| creator.reputation)
            .unwrap_or(0))
    }

    pub fn token_balance(
        &self,
        token: &ContractAddress,
        holder: &Address,
    ) -> Result<Balance, LedgerError> {
        Ok(self
            .token(token)?
            .balances
            .get(holder)
            .copied()
            .unwrap_or(0))
    }

    pub fn token_metadata(&self, token: &ContractAddress) -> Option<state::TokenMetadata> {
        self.tokens.get(token).map(|token| token.metadata.clone())
    }

    fn next_contract_address(&mut self, author: &AccountId) -> ContractAddress {
        self.deployments += 1;
        Hash::of(&(author, self.deployments))
    }

    fn token(&self, address: &ContractAddress) -> Result<&TokenState, LedgerError> {
        self.tokens.get(address).ok_or_else(|| {
            if self.daos.contains_key(address) {
                LedgerError::NotAToken
            } else {
                LedgerError::InexistentContract
            }
        })
    }

    fn token_mut(&mut self, address: &ContractAddress) -> Result<&mut TokenState, LedgerError> {
        if self.tokens.contains_key(address) {
            Ok(self.tokens.get_mut(address).expect("key checked above"))
        } else if self.daos.contains_key(address) {
            Err(LedgerError::NotAToken)
        } else {
            Err(LedgerError::InexistentContract)
        }
    }

    fn dao(&self, address: &ContractAddress) -> Result<&DaoState, LedgerError> {
        self.daos.get(address).ok_or_else(|| {
            if self.tokens.contains_key(address) {
                LedgerError::NotADao
            } else {
                LedgerError::InexistentContract
            }
        })
    }

    fn dao_mut(&mut self, address: &ContractAddress) -> Result<&mut DaoState, LedgerError> {
        if self.daos.contains_key(address) {
            Ok(self.daos.get_mut(address).expect("key checked above"))
        } else if self.tokens.contains_key(address) {
            Err(LedgerError::NotADao)
        } else {
            Err(LedgerError::InexistentContract)
        }
    }
}

impl DaoState {
    fn apply_vote(&mut self, content_id: ContentId) -> Result<(), LedgerError> {
        let content = self
            .contents
            .get_mut(content_id as usize)
            .ok_or(LedgerError::InexistentContent)?;
        content.votes += 1;
        let creator = content.creator;
        self.creators.entry(creator).or_default().pending += REPUTATION_PER_VOTE;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transaction::TransactionExtra;

    fn apply_ok<M: crate::message::Message>(
        ledger: &mut Ledger,
        author: &crypto::Pair,
        message: M,
    ) -> Vec<event::Event> {
        let xt = SignedTransaction::new_signed(
            author,
            message.into_call(),
            TransactionExtra {
                nonce: ledger.account_nonce(&author.public()),
                genesis_hash: Hash::zero(),
            },
        );
        ledger.apply(&xt)
    }

    fn dispatch_error(events: &[event::Event]) -> Option<LedgerError> {
        events.iter().find_map(|event| match event {
            event::Event::System(event::System::ExtrinsicFailed(error)) => Some(*error),
            _ => None,
        })
    }

    fn deploy_token_and_dao(
        ledger: &mut Ledger,
        author: &crypto::Pair,
    ) -> (ContractAddress, ContractAddress) {
        let events = apply_ok(
            ledger,
            author,
            message::DeployRewardToken {
                name: "AIGen Reward".parse().unwrap(),
                symbol: "AIGR".parse().unwrap(),
                initial_holder: author.public(),
                initial_supply: amount::from_whole(1_000_000),
            },
        );
        let token = match &events[0] {
            event::Event::Token(event::Token::Deployed(address)) => *address,
            event => panic!("unexpected event {:?}", event),
        };
        let events = apply_ok(ledger, author, message::DeployDao {
            reward_token: token,
        });
        let dao = match &events[0] {
            event::Event::Dao(event::Dao::Deployed(address)) => *address,
            event => panic!("unexpected event {:?}", event),
        };
        (token, dao)
    }

    fn create_content(
        ledger: &mut Ledger,
        author: &crypto::Pair,
        dao: ContractAddress,
    ) -> ContentId {
        let events = apply_ok(ledger, author, message::CreateContent {
            dao,
            prompt: "A futuristic cityscape at sunset".parse().unwrap(),
            ai_model: "Stable Diffusion v2.1".parse().unwrap(),
            content_hash: "QmXyZ123...abc".parse().unwrap(),
        });
        match &events[0] {
            event::Event::Dao(event::Dao::ContentCreated(_, content_id, _)) => *content_id,
            event => panic!("unexpected event {:?}", event),
        }
    }

    #[test]
    fn content_ids_are_sequential() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let (_, dao) = deploy_token_and_dao(&mut ledger, &alice);
        assert_eq!(create_content(&mut ledger, &alice, dao), 0);
        assert_eq!(create_content(&mut ledger, &alice, dao), 1);
        assert_eq!(create_content(&mut ledger, &alice, dao), 2);
        assert_eq!(ledger.content_count(&dao).unwrap(), 3);
    }

    #[test]
    fn deploy_dao_requires_token() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let events = apply_ok(&mut ledger, &alice, message::DeployDao {
            reward_token: Hash::random(),
        });
        assert_eq!(dispatch_error(&events), Some(LedgerError::InexistentContract));
    }

    #[test]
    fn transfer_moves_balances() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let (token, dao) = deploy_token_and_dao(&mut ledger, &alice);

        apply_ok(&mut ledger, &alice, message::Transfer {
            token,
            recipient: dao,
            amount: amount::from_whole(100_000),
        });
        assert_eq!(
            ledger.token_balance(&token, &dao).unwrap(),
            amount::from_whole(100_000)
        );
        assert_eq!(
            ledger
                .token_balance(&token, &alice.public().address())
                .unwrap(),
            amount::from_whole(900_000)
        );
    }

    #[test]
    fn transfer_rejects_overdraft() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let bob = crypto::Pair::from_string("//Bob").unwrap();
        let (token, _) = deploy_token_and_dao(&mut ledger, &alice);

        let events = apply_ok(&mut ledger, &bob, message::Transfer {
            token,
            recipient: alice.public().address(),
            amount: 1,
        });
        assert_eq!(dispatch_error(&events), Some(LedgerError::InsufficientBalance));
    }

    #[test]
    fn batch_vote_is_atomic() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let (_, dao) = deploy_token_and_dao(&mut ledger, &alice);
        let first = create_content(&mut ledger, &alice, dao);

        let events = apply_ok(&mut ledger, &alice, message::BatchVote {
            dao,
            content_ids: vec![first, 17],
        });
        assert_eq!(dispatch_error(&events), Some(LedgerError::InexistentContent));
        let content = ledger.get_content(&dao, first).unwrap().unwrap();
        assert_eq!(content.votes, 0);
    }

    #[test]
    fn votes_accrue_and_claim_pays_out() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let (token, dao) = deploy_token_and_dao(&mut ledger, &alice);
        apply_ok(&mut ledger, &alice, message::Transfer {
            token,
            recipient: dao,
            amount: amount::from_whole(100_000),
        });
        let first = create_content(&mut ledger, &alice, dao);
        let second = create_content(&mut ledger, &alice, dao);

        apply_ok(&mut ledger, &alice, message::Vote {
            dao,
            content_id: first,
        });
        apply_ok(&mut ledger, &alice, message::BatchVote {
            dao,
            content_ids: vec![first, second],
        });
        assert_eq!(ledger.get_content(&dao, first).unwrap().unwrap().votes, 2);
        assert_eq!(ledger.get_content(&dao, second).unwrap().unwrap().votes, 1);

        let events = apply_ok(&mut ledger, &alice, message::ClaimReputationRewards { dao });
        assert_eq!(dispatch_error(&events), None);
        assert_eq!(
            ledger.creator_reputation(&dao, &alice.public()).unwrap(),
            3 * REPUTATION_PER_VOTE
        );
        let payout = Balance::from(3 * REPUTATION_PER_VOTE) * REWARD_PER_REPUTATION_POINT;
        assert_eq!(
            ledger
                .token_balance(&token, &alice.public().address())
                .unwrap(),
            amount::from_whole(900_000) + payout
        );
        assert_eq!(
            ledger.token_balance(&token, &dao).unwrap(),
            amount::from_whole(100_000) - payout
        );
    }

    #[test]
    fn claim_without_pending_reward_fails() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let (_, dao) = deploy_token_and_dao(&mut ledger, &alice);

        let events = apply_ok(&mut ledger, &alice, message::ClaimReputationRewards { dao });
        assert_eq!(dispatch_error(&events), Some(LedgerError::NoPendingReward));

        // A second claim right after a successful one fails the same way.
        create_content(&mut ledger, &alice, dao);
        apply_ok(&mut ledger, &alice, message::Vote { dao, content_id: 0 });
        let first_claim = apply_ok(&mut ledger, &alice, message::ClaimReputationRewards { dao });
        assert_eq!(dispatch_error(&first_claim), None);
        let second_claim = apply_ok(&mut ledger, &alice, message::ClaimReputationRewards { dao });
        assert_eq!(dispatch_error(&second_claim), Some(LedgerError::NoPendingReward));
    }

    #[test]
    fn claim_with_underfunded_treasury_fails() {
        let mut ledger = Ledger::new();
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let (_, dao) = deploy_token_and_dao(&mut ledger, &alice);
        create_content(&mut ledger, &alice, dao);
        apply_ok(&mut ledger, &alice, message::Vote { dao, content_id: 0 });

        // The treasury was never funded.
        let events = apply_ok(&mut ledger, &alice, message::ClaimReputationRewards { dao });
        assert_eq!(dispatch_error(&events), Some(LedgerError::InsufficientBalance));
        // The pending points stay claimable.
        assert_eq!(ledger.creator_reputation(&dao, &alice.public()).unwrap(), 0);
    }
}
