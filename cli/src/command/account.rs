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

//! Define the commands supported by the CLI related to accounts.

use super::*;

/// Account related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Address(ShowAddress),
    Nonce(ShowNonce),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Address(cmd) => cmd.run(command_context).await,
            Command::Nonce(cmd) => cmd.run(command_context).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the account id and ledger address for the key pair derived from `seed`.
pub struct ShowAddress {
    seed: String,
}

#[async_trait::async_trait]
impl CommandT for ShowAddress {
    async fn run(&self, _command_context: &CommandContext) -> Result<(), CommandError> {
        let key_pair = crypto::Pair::from_string(&format!("//{}", self.seed))
            .map_err(CommandError::InvalidAuthorKeySeed)?;
        println!("account id: {}", key_pair.public());
        println!("address:    {}", key_pair.public().address());
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the next transaction index (nonce) of an account
pub struct ShowNonce {
    /// Hex-encoded account id
    account_id: AccountId,
}

#[async_trait::async_trait]
impl CommandT for ShowNonce {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let nonce = command_context.client.account_nonce(&self.account_id).await?;
        println!("{}", nonce);
        Ok(())
    }
}
