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

//! Test the client against the in-memory emulator.
//!
//! The tests walk the same deploy-fund-interact sequence the CLI demo drives against a
//! node.

use aigen_dao_client::*;
use aigen_dao_test_utils::*;

#[async_std::test]
async fn content_ids_are_assigned_sequentially() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (_, dao) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;

    let first = submit_ok(&client, &alice, random_create_content_message(dao))
        .await
        .result
        .unwrap();
    let second = submit_ok(&client, &alice, random_create_content_message(dao))
        .await
        .result
        .unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(client.content_count(dao).await.unwrap(), 2);
}

#[async_std::test]
async fn funding_moves_the_exact_amount() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (token, dao) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;

    transfer(&client, &alice, token, dao, amount::from_whole(100_000)).await;

    assert_eq!(
        client.token_balance(token, &dao).await.unwrap(),
        amount::from_whole(100_000)
    );
    assert_eq!(
        client
            .token_balance(token, &alice.public().address())
            .await
            .unwrap(),
        amount::from_whole(900_000)
    );
}

#[async_std::test]
async fn single_then_batch_vote_counts() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (_, dao) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;

    let create_content_message = message::CreateContent {
        dao,
        prompt: "A futuristic cityscape at sunset".parse().unwrap(),
        ai_model: "Stable Diffusion v2.1".parse().unwrap(),
        content_hash: "QmXyZ123...abc".parse().unwrap(),
    };
    let first = submit_ok(&client, &alice, create_content_message.clone())
        .await
        .result
        .unwrap();
    let second = submit_ok(&client, &alice, random_create_content_message(dao))
        .await
        .result
        .unwrap();

    let vote_included = submit_ok(&client, &alice, message::Vote {
        dao,
        content_id: first,
    })
    .await;
    assert_eq!(vote_included.result, Ok(()));
    assert_eq!(
        vote_included.events[0],
        event::Dao::Voted(dao, first, alice.public()).into()
    );

    let batch_included = submit_ok(&client, &alice, message::BatchVote {
        dao,
        content_ids: vec![first, second],
    })
    .await;
    assert_eq!(batch_included.result, Ok(()));

    let content = client.get_content(dao, first).await.unwrap().unwrap();
    assert_eq!(content.prompt, create_content_message.prompt);
    assert_eq!(content.ai_model, create_content_message.ai_model);
    assert_eq!(content.content_hash, create_content_message.content_hash);
    assert_eq!(content.votes, 2);
    assert_eq!(content.creator, alice.public());

    let content = client.get_content(dao, second).await.unwrap().unwrap();
    assert_eq!(content.votes, 1);
}

#[async_std::test]
async fn claim_increases_reputation_and_pays_out() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (token, dao) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;
    transfer(&client, &alice, token, dao, amount::from_whole(100_000)).await;

    let content_id = submit_ok(&client, &alice, random_create_content_message(dao))
        .await
        .result
        .unwrap();
    submit_ok(&client, &alice, message::Vote { dao, content_id }).await;

    let reputation_before = client.creator_reputation(dao, &alice.public()).await.unwrap();
    let balance_before = client
        .token_balance(token, &alice.public().address())
        .await
        .unwrap();

    let claim_included = submit_ok(&client, &alice, message::ClaimReputationRewards { dao }).await;
    let (new_score, payout) = claim_included.result.unwrap();

    let reputation_after = client.creator_reputation(dao, &alice.public()).await.unwrap();
    assert!(reputation_after > reputation_before);
    assert_eq!(reputation_after, new_score);

    let balance_after = client
        .token_balance(token, &alice.public().address())
        .await
        .unwrap();
    assert_eq!(balance_after, balance_before + payout);
    assert_eq!(
        client.token_balance(token, &dao).await.unwrap(),
        amount::from_whole(100_000) - payout
    );
}

#[async_std::test]
async fn claim_without_pending_reward_fails() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (_, dao) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;

    let claim_included = submit_ok(&client, &alice, message::ClaimReputationRewards { dao }).await;
    assert_eq!(claim_included.result, Err(LedgerError::NoPendingReward));
}

#[async_std::test]
/// A failed step leaves the previously confirmed state untouched.
async fn failed_batch_vote_has_no_effect() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (_, dao) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;
    let content_id = submit_ok(&client, &alice, random_create_content_message(dao))
        .await
        .result
        .unwrap();

    let batch_included = submit_ok(&client, &alice, message::BatchVote {
        dao,
        content_ids: vec![content_id, 17],
    })
    .await;
    assert_eq!(batch_included.result, Err(LedgerError::InexistentContent));

    // The earlier creation stays confirmed, the failed batch left no votes.
    let content = client.get_content(dao, content_id).await.unwrap().unwrap();
    assert_eq!(content.votes, 0);
}

#[async_std::test]
async fn deploy_dao_without_token_fails() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");

    let deploy_included = submit_ok(&client, &alice, message::DeployDao {
        reward_token: Hash::random(),
    })
    .await;
    assert_eq!(
        deploy_included.result,
        Err(LedgerError::InexistentContract)
    );
}

#[async_std::test]
/// Submit a transaction with an invalid genesis hash and expect an error.
async fn invalid_transaction() {
    let _ = env_logger::try_init();
    let client = Client::new_emulator();
    let alice = key_pair_from_string("Alice");
    let (token, _) = deploy_token_and_dao(&client, &alice, amount::from_whole(1_000_000)).await;

    let transfer_tx = Transaction::new_signed(
        &alice,
        message::Transfer {
            token,
            recipient: alice.public().address(),
            amount: 1000,
        },
        TransactionExtra {
            nonce: client.account_nonce(&alice.public()).await.unwrap(),
            genesis_hash: Hash::zero(),
        },
    );

    let response = client.submit_transaction(transfer_tx).await;
    match response {
        Err(Error::InvalidTransaction) => (),
        Err(error) => panic!("Unexpected error {:?}", error),
        Ok(_) => panic!("Transaction was accepted unexpectedly"),
    }
}
