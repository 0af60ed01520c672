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

//! Define the commands supported by the CLI related to the DAO contract.

use super::*;

/// DAO related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Deploy(Deploy),
    Reputation(ShowReputation),
    ClaimRewards(ClaimRewards),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Deploy(cmd) => cmd.run(command_context).await,
            Command::Reputation(cmd) => cmd.run(command_context).await,
            Command::ClaimRewards(cmd) => cmd.run(command_context).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Deploy a DAO contract wired to an already deployed reward token.
pub struct Deploy {
    /// Address of the reward token contract.
    reward_token: ContractAddress,
}

#[async_trait::async_trait]
impl CommandT for Deploy {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let deploy_fut = command_context
            .client
            .sign_and_submit_message(&command_context.tx_author, message::DeployDao {
                reward_token: self.reward_token,
            })
            .await?;
        announce_tx("deploying DAO contract...");
        let deployed = deploy_fut.await?;
        let address = transaction_included_ok(&deployed)?;
        println!("DAO deployed at {} in block {}", address, deployed.block);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the reputation score of a creator account.
pub struct ShowReputation {
    /// Address of the DAO contract.
    dao: ContractAddress,
    /// Hex-encoded account id of the creator.
    account_id: AccountId,
}

#[async_trait::async_trait]
impl CommandT for ShowReputation {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let reputation = command_context
            .client
            .creator_reputation(self.dao, &self.account_id)
            .await?;
        println!("{}", reputation);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Claim the reputation rewards accrued by the author account.
pub struct ClaimRewards {
    /// Address of the DAO contract.
    dao: ContractAddress,
}

#[async_trait::async_trait]
impl CommandT for ClaimRewards {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let claim_fut = command_context
            .client
            .sign_and_submit_message(
                &command_context.tx_author,
                message::ClaimReputationRewards { dao: self.dao },
            )
            .await?;
        announce_tx("claiming reputation rewards...");
        let claimed = claim_fut.await?;
        let (new_score, payout) = transaction_included_ok(&claimed)?;
        println!(
            "claimed {} tokens in block {}; reputation is now {}",
            amount::format(payout),
            claimed.block,
            new_score,
        );
        Ok(())
    }
}
