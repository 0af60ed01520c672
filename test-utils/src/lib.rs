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

//! Miscellaneous helpers used throughout AIGen DAO tests.

use rand::distributions::Alphanumeric;
use rand::Rng;

use aigen_dao_client::*;

/// Submit a transaction and wait for it to be included in a block.
///
/// Panics if submission errors.
pub async fn submit_ok<Message_: Message>(
    client: &Client,
    author: &crypto::Pair,
    message: Message_,
) -> TransactionIncluded<Message_> {
    client
        .sign_and_submit_message(author, message)
        .await
        .unwrap()
        .await
        .unwrap()
}

pub fn key_pair_from_string(value: impl AsRef<str>) -> crypto::Pair {
    crypto::Pair::from_string(format!("//{}", value.as_ref()).as_str()).unwrap()
}

/// Deploy a reward token held entirely by `author`. Returns the token's address.
pub async fn deploy_reward_token(
    client: &Client,
    author: &crypto::Pair,
    initial_supply: Balance,
) -> ContractAddress {
    let tx_included = submit_ok(client, author, message::DeployRewardToken {
        name: "AIGen Reward".parse().unwrap(),
        symbol: "AIGR".parse().unwrap(),
        initial_holder: author.public(),
        initial_supply,
    })
    .await;
    tx_included.result.unwrap()
}

/// Deploy a DAO wired to the given reward token. Returns the DAO's address.
pub async fn deploy_dao(
    client: &Client,
    author: &crypto::Pair,
    reward_token: ContractAddress,
) -> ContractAddress {
    let tx_included = submit_ok(client, author, message::DeployDao { reward_token }).await;
    tx_included.result.unwrap()
}

/// Deploy a reward token and a DAO wired to it, with the whole supply held by `author`.
pub async fn deploy_token_and_dao(
    client: &Client,
    author: &crypto::Pair,
    initial_supply: Balance,
) -> (ContractAddress, ContractAddress) {
    let token = deploy_reward_token(client, author, initial_supply).await;
    let dao = deploy_dao(client, author, token).await;
    (token, dao)
}

/// Transfer tokens and assert that the transfer was applied.
pub async fn transfer(
    client: &Client,
    donator: &crypto::Pair,
    token: ContractAddress,
    recipient: Address,
    amount: Balance,
) {
    let tx_included = submit_ok(client, donator, message::Transfer {
        token,
        recipient,
        amount,
    })
    .await;
    assert_eq!(
        tx_included.result,
        Ok(()),
        "Failed to transfer funds to the recipient address."
    );
}

/// Create a [message::CreateContent] with random text fields.
pub fn random_create_content_message(dao: ContractAddress) -> message::CreateContent {
    message::CreateContent {
        dao,
        prompt: random_string128(),
        ai_model: random_string128(),
        content_hash: random_string128(),
    }
}

pub fn random_string128() -> String128 {
    let size = rand::thread_rng().gen_range(1..33);
    random_alnum_string(size).parse().unwrap()
}

pub fn random_alnum_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect::<String>()
}
