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

//! The scripted deployment and demo sequence.

use super::*;

/// Name the reward token is deployed with.
const TOKEN_NAME: &str = "AIGen Reward";
/// Symbol the reward token is deployed with.
const TOKEN_SYMBOL: &str = "AIGR";
/// Whole tokens minted to the deployer at token deployment.
const INITIAL_SUPPLY: u128 = 1_000_000;
/// Whole tokens moved to the DAO treasury before the demo interactions.
const FUND_AMOUNT: u128 = 100_000;

#[derive(StructOpt, Debug, Clone)]
/// Deploy the reward token and the DAO contract, fund the DAO treasury and run a
/// scripted sequence of content, voting and reward interactions against it.
///
/// Every step blocks until its transaction is included in a block before the next step
/// is submitted; the first failure aborts the whole sequence.
pub struct Demo {}

#[async_trait::async_trait]
impl CommandT for Demo {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let client = &command_context.client;
        let deployer = &command_context.tx_author;

        println!("🚀 Starting AIGen DAO deployment...");
        println!("🔑 Using account: {}", deployer.public());

        // Reward token deployment. The whole supply goes to the deployer.
        println!("🪙 Deploying reward token...");
        let deployed = client
            .sign_and_submit_message(deployer, message::DeployRewardToken {
                name: TOKEN_NAME.parse().unwrap(),
                symbol: TOKEN_SYMBOL.parse().unwrap(),
                initial_holder: deployer.public(),
                initial_supply: amount::from_whole(INITIAL_SUPPLY),
            })
            .await?
            .await?;
        let reward_token = transaction_included_ok(&deployed)?;
        println!("✅ Reward token deployed to: {}", reward_token);

        // The DAO is constructed against the confirmed token address.
        println!("🖼️ Deploying DAO contract...");
        let deployed = client
            .sign_and_submit_message(deployer, message::DeployDao { reward_token })
            .await?
            .await?;
        let dao = transaction_included_ok(&deployed)?;
        println!("✅ DAO deployed to: {}", dao);

        // Fund the DAO treasury so it can pay out reputation rewards later.
        println!("💰 Funding contract with reward tokens...");
        let fund_amount = amount::from_whole(FUND_AMOUNT);
        let funded = client
            .sign_and_submit_message(deployer, message::Transfer {
                token: reward_token,
                recipient: dao,
                amount: fund_amount,
            })
            .await?
            .await?;
        transaction_included_ok(&funded)?;
        println!("✅ Contract funded with {} tokens", amount::format(fund_amount));

        println!("🎬 Starting demo interactions...");

        // Content ids are assigned sequentially by the DAO, so the second creation is
        // only submitted once the first one is confirmed.
        println!("📝 Creating content...");
        let created = client
            .sign_and_submit_message(deployer, message::CreateContent {
                dao,
                prompt: "A futuristic cityscape at sunset".parse().unwrap(),
                ai_model: "Stable Diffusion v2.1".parse().unwrap(),
                content_hash: "QmXyZ123...abc".parse().unwrap(),
            })
            .await?
            .await?;
        let first_content = transaction_included_ok(&created)?;
        println!("✅ Content created (id: {})", first_content);

        let created = client
            .sign_and_submit_message(deployer, message::CreateContent {
                dao,
                prompt: "Cyberpunk character portrait".parse().unwrap(),
                ai_model: "Midjourney v5".parse().unwrap(),
                content_hash: "QmAbC456...def".parse().unwrap(),
            })
            .await?
            .await?;
        let second_content = transaction_included_ok(&created)?;
        println!("✅ Content created (id: {})", second_content);

        println!("🗳️ Voting on content...");
        let voted = client
            .sign_and_submit_message(deployer, message::Vote {
                dao,
                content_id: first_content,
            })
            .await?
            .await?;
        transaction_included_ok(&voted)?;
        println!("✅ Voted on content {}", first_content);

        println!("🗳️ Batch voting...");
        let batch_voted = client
            .sign_and_submit_message(deployer, message::BatchVote {
                dao,
                content_ids: vec![first_content, second_content],
            })
            .await?
            .await?;
        transaction_included_ok(&batch_voted)?;
        println!("✅ Batch voted on content [{}, {}]", first_content, second_content);

        println!("🔍 Checking content details...");
        let content = client
            .get_content(dao, first_content)
            .await?
            .ok_or(CommandError::ContentNotFound {
                dao,
                content_id: first_content,
            })?;
        println!("📋 Content {} details:", first_content);
        println!("  prompt:       {}", content.prompt);
        println!("  AI model:     {}", content.ai_model);
        println!("  content hash: {}", content.content_hash);
        println!("  votes:        {}", content.votes);

        println!("🏆 Claiming reputation rewards...");
        let claimed = client
            .sign_and_submit_message(deployer, message::ClaimReputationRewards { dao })
            .await?
            .await?;
        transaction_included_ok(&claimed)?;
        println!("✅ Reputation rewards claimed");

        println!("🔎 Verifying contract state...");
        let reputation = client.creator_reputation(dao, &deployer.public()).await?;
        println!("🏅 Creator reputation: {}", reputation);

        let balance = client
            .token_balance(reward_token, &deployer.public().address())
            .await?;
        println!("💰 Deployer token balance: {}", amount::format(balance));

        println!("🎉 Deployment and demo completed successfully!");
        Ok(())
    }
}
