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

//! Define the command line parser and interface.

#![allow(clippy::large_enum_variant)]

use aigen_dao_client::*;
use structopt::StructOpt;
use thiserror::Error as ThisError;

mod command;
use command::{account, content, dao, demo, other, token};

/// The type that captures the command line.
#[derive(StructOpt, Clone)]
#[structopt(max_term_width = 80)]
pub struct CommandLine {
    #[structopt(flatten)]
    pub network_options: NetworkOptions,

    #[structopt(flatten)]
    pub tx_options: TxOptions,

    #[structopt(subcommand)]
    pub command: Command,
}

impl CommandLine {
    pub async fn run(self) -> Result<(), CommandError> {
        let client = self.network_options.client().await?;
        let command_context = CommandContext {
            client,
            tx_author: self.tx_options.author_key_pair()?,
        };
        self.command.run(&command_context).await
    }
}

/// Network-related command-line options
#[derive(StructOpt, Clone, Debug)]
pub struct NetworkOptions {
    /// IP address or domain name that hosts the RPC API
    #[structopt(
        long,
        default_value = "127.0.0.1",
        env = "AIGEN_NODE_HOST",
        parse(try_from_str = url::Host::parse),
    )]
    pub node_host: url::Host,

    /// Run against an in-memory ledger emulator instead of a node. The ledger state is
    /// dropped when the process exits.
    #[structopt(long)]
    pub dev: bool,
}

impl NetworkOptions {
    pub async fn client(&self) -> Result<Client, Error> {
        if self.dev {
            Ok(Client::new_emulator())
        } else {
            Client::create_with_executor(self.node_host.clone()).await
        }
    }
}

/// Transaction-related command-line options
#[derive(StructOpt, Clone)]
pub struct TxOptions {
    /// The key pair that is used to sign transactions is derived from this seed.
    #[structopt(
        long,
        default_value = "Alice",
        env = "AIGEN_AUTHOR",
        value_name = "seed"
    )]
    pub author_key_seed: String,
}

impl TxOptions {
    /// Return the key pair derived from [TxOptions::author_key_seed].
    pub fn author_key_pair(&self) -> Result<crypto::Pair, CommandError> {
        crypto::Pair::from_string(&format!("//{}", self.author_key_seed))
            .map_err(CommandError::InvalidAuthorKeySeed)
    }
}

/// The context every command is run in.
pub struct CommandContext {
    pub client: Client,
    pub tx_author: crypto::Pair,
}

/// The supported [CommandLine] commands.
/// The commands are grouped by domain.
#[derive(StructOpt, Clone)]
pub enum Command {
    Account(account::Command),
    Token(token::Command),
    Content(content::Command),
    Dao(dao::Command),

    /// Run the scripted deployment and demo sequence against the connected ledger.
    Demo(demo::Demo),

    #[structopt(flatten)]
    Other(other::Command),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Account(cmd) => cmd.run(command_context).await,
            Command::Token(cmd) => cmd.run(command_context).await,
            Command::Content(cmd) => cmd.run(command_context).await,
            Command::Dao(cmd) => cmd.run(command_context).await,
            Command::Demo(cmd) => cmd.run(command_context).await,
            Command::Other(cmd) => cmd.run(command_context).await,
        }
    }
}

/// The trait that every command must implement.
#[async_trait::async_trait]
pub trait CommandT {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError>;
}

/// Error returned by [CommandT::run].
///
/// Implements [From] for client errors and ledger errors.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("client error")]
    ClientError(#[from] Error),

    #[error(transparent)]
    FailedTransaction(#[from] LedgerError),

    #[error("invalid author key seed: {0}")]
    InvalidAuthorKeySeed(String),

    #[error("cannot find content {content_id} in DAO {dao}")]
    ContentNotFound {
        dao: ContractAddress,
        content_id: ContentId,
    },

    #[error("no reward token is deployed at {address}")]
    TokenNotFound { address: ContractAddress },
}
