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

//! Getting started with the client by deploying a reward token and transferring funds.
//!
//! We're deploying a token held by Alice, transferring some of it to Bob and inspecting
//! the ledger state. The example runs against the in-memory emulator; replace
//! [Client::new_emulator] with [Client::create_with_executor] to run it against a
//! devnet node.

use aigen_dao_client::*;

#[async_std::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Create a key pair to author transactions from some seed data.
    let alice = crypto::Pair::from_string("//Alice").unwrap();
    println!("Deploying the reward token as //Alice ({})", alice.public());

    // The receiver of the token transfer is Bob. We only need the address.
    let bob = crypto::Pair::from_string("//Bob").unwrap().public().address();
    println!("Recipient: //Bob ({})", bob);

    let client = Client::new_emulator();

    // Sign and submit the deployment. If successful, returns a future that resolves
    // when the transaction is included in a block.
    print!("Submitting token deployment... ");
    let deploy_submitted = client
        .sign_and_submit_message(&alice, message::DeployRewardToken {
            name: "AIGen Reward".parse().unwrap(),
            symbol: "AIGR".parse().unwrap(),
            initial_holder: alice.public(),
            initial_supply: amount::from_whole(1_000),
        })
        .await?;
    println!("done");

    print!("Waiting for transaction to be included in block... ");
    let deploy_included = deploy_submitted.await?;
    println!("done");

    // We can use the [TransactionIncluded] struct to get the block and the result of
    // applying the transaction in the ledger.
    println!("Transaction included in block {}", deploy_included.block);
    let token = match deploy_included.result {
        Ok(address) => address,
        Err(err) => panic!("Failed to deploy the reward token: {:?}", err),
    };
    println!("Reward token deployed at {}", token);

    // Show balances of Alice's and Bob's addresses
    let balance_alice = client.token_balance(token, &alice.public().address()).await?;
    println!("Balance Alice: {}", amount::format(balance_alice));
    let balance_bob = client.token_balance(token, &bob).await?;
    println!("Balance Bob:   {}", amount::format(balance_bob));

    print!("Submitting transfer transaction... ");
    let transfer_submitted = client
        .sign_and_submit_message(&alice, message::Transfer {
            token,
            recipient: bob,
            amount: amount::from_whole(1),
        })
        .await?;
    println!("done");

    print!("Waiting for transaction to be included in block... ");
    let transfer_included = transfer_submitted.await?;
    println!("done");

    match transfer_included.result {
        Ok(()) => println!("Funds successfully transferred!"),
        Err(err) => println!("Failed to transfer funds: {:?}", err),
    }

    // Show the new balances
    let balance_alice = client.token_balance(token, &alice.public().address()).await?;
    println!("Balance Alice: {}", amount::format(balance_alice));
    let balance_bob = client.token_balance(token, &bob).await?;
    println!("Balance Bob:   {}", amount::format(balance_bob));

    Ok(())
}
