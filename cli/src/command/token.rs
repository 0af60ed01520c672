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

//! Define the commands supported by the CLI related to the reward token.

use super::*;

/// Reward token related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Deploy(Deploy),
    Show(Show),
    Balance(ShowBalance),
    Transfer(Transfer),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Deploy(cmd) => cmd.run(command_context).await,
            Command::Show(cmd) => cmd.run(command_context).await,
            Command::Balance(cmd) => cmd.run(command_context).await,
            Command::Transfer(cmd) => cmd.run(command_context).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Deploy a reward token with a fixed supply held by the author account.
pub struct Deploy {
    /// Name of the token.
    name: String128,
    /// Symbol of the token.
    symbol: String128,
    /// Initial supply in whole tokens.
    #[structopt(parse(try_from_str = amount::parse))]
    initial_supply: Balance,
}

#[async_trait::async_trait]
impl CommandT for Deploy {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let deploy_fut = command_context
            .client
            .sign_and_submit_message(&command_context.tx_author, message::DeployRewardToken {
                name: self.name.clone(),
                symbol: self.symbol.clone(),
                initial_holder: command_context.tx_author.public(),
                initial_supply: self.initial_supply,
            })
            .await?;
        announce_tx("deploying reward token...");
        let deployed = deploy_fut.await?;
        let address = transaction_included_ok(&deployed)?;
        println!(
            "reward token {} deployed at {} in block {}",
            self.symbol, address, deployed.block,
        );
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the metadata of a deployed reward token.
pub struct Show {
    /// Address of the token contract.
    token: ContractAddress,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let metadata = command_context
            .client
            .token_metadata(self.token)
            .await?
            .ok_or(CommandError::TokenNotFound {
                address: self.token,
            })?;
        println!("name: {}", metadata.name);
        println!("symbol: {}", metadata.symbol);
        println!("total supply: {}", amount::format(metadata.total_supply));
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the token balance of a holder address.
pub struct ShowBalance {
    /// Address of the token contract.
    token: ContractAddress,
    /// Address of the holder.
    holder: Address,
}

#[async_trait::async_trait]
impl CommandT for ShowBalance {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let metadata = command_context
            .client
            .token_metadata(self.token)
            .await?
            .ok_or(CommandError::TokenNotFound {
                address: self.token,
            })?;
        let balance = command_context
            .client
            .token_balance(self.token, &self.holder)
            .await?;
        println!("{} {}", amount::format(balance), metadata.symbol);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Transfer tokens from the author account to a recipient address.
pub struct Transfer {
    /// Address of the token contract.
    token: ContractAddress,
    /// Address of the recipient.
    recipient: Address,
    /// The amount to transfer, in whole tokens.
    #[structopt(parse(try_from_str = amount::parse))]
    amount: Balance,
}

#[async_trait::async_trait]
impl CommandT for Transfer {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let transfer_fut = command_context
            .client
            .sign_and_submit_message(&command_context.tx_author, message::Transfer {
                token: self.token,
                recipient: self.recipient,
                amount: self.amount,
            })
            .await?;
        announce_tx("transferring tokens...");
        let transferred = transfer_fut.await?;
        transaction_included_ok(&transferred)?;
        println!(
            "transferred {} tokens to {} in block {}",
            amount::format(self.amount),
            self.recipient,
            transferred.block,
        );
        Ok(())
    }
}
