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

//! Define the commands supported by the CLI related to content entries.

use super::*;

/// Content related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Create(Create),
    List(List),
    Show(Show),
    Vote(Vote),
    BatchVote(BatchVote),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Create(cmd) => cmd.run(command_context).await,
            Command::List(cmd) => cmd.run(command_context).await,
            Command::Show(cmd) => cmd.run(command_context).await,
            Command::Vote(cmd) => cmd.run(command_context).await,
            Command::BatchVote(cmd) => cmd.run(command_context).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Register a content entry with the given DAO.
pub struct Create {
    /// Address of the DAO contract.
    dao: ContractAddress,
    /// The prompt the content was generated from.
    prompt: String128,
    /// Label of the AI model that generated the content.
    ai_model: String128,
    /// Hash string locating the content data off-chain.
    content_hash: String128,
}

#[async_trait::async_trait]
impl CommandT for Create {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let create_fut = command_context
            .client
            .sign_and_submit_message(&command_context.tx_author, message::CreateContent {
                dao: self.dao,
                prompt: self.prompt.clone(),
                ai_model: self.ai_model.clone(),
                content_hash: self.content_hash.clone(),
            })
            .await?;
        announce_tx("creating content...");
        let created = create_fut.await?;
        let content_id = transaction_included_ok(&created)?;
        println!("content {} created in block {}", content_id, created.block);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// List all content entries of a DAO
pub struct List {
    /// Address of the DAO contract.
    dao: ContractAddress,
}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let count = command_context.client.content_count(self.dao).await?;
        println!("CONTENT ({})", count);
        for content_id in 0..count {
            if let Some(content) = command_context
                .client
                .get_content(self.dao, content_id)
                .await?
            {
                println!("{}: {} ({} votes)", content_id, content.prompt, content.votes);
            }
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show a content entry of a DAO.
pub struct Show {
    /// Address of the DAO contract.
    dao: ContractAddress,
    /// The id of the content entry.
    content_id: ContentId,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let content = command_context
            .client
            .get_content(self.dao, self.content_id)
            .await?
            .ok_or(CommandError::ContentNotFound {
                dao: self.dao,
                content_id: self.content_id,
            })?;
        println!("prompt: {}", content.prompt);
        println!("AI model: {}", content.ai_model);
        println!("content hash: {}", content.content_hash);
        println!("votes: {}", content.votes);
        println!("creator: {}", content.creator);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Vote on a content entry.
pub struct Vote {
    /// Address of the DAO contract.
    dao: ContractAddress,
    /// The id of the content entry.
    content_id: ContentId,
}

#[async_trait::async_trait]
impl CommandT for Vote {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let vote_fut = command_context
            .client
            .sign_and_submit_message(&command_context.tx_author, message::Vote {
                dao: self.dao,
                content_id: self.content_id,
            })
            .await?;
        announce_tx("voting...");
        let voted = vote_fut.await?;
        transaction_included_ok(&voted)?;
        println!("voted on content {} in block {}", self.content_id, voted.block);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Vote on multiple content entries in a single transaction.
pub struct BatchVote {
    /// Address of the DAO contract.
    dao: ContractAddress,
    /// The ids of the content entries.
    content_ids: Vec<ContentId>,
}

#[async_trait::async_trait]
impl CommandT for BatchVote {
    async fn run(&self, command_context: &CommandContext) -> Result<(), CommandError> {
        let vote_fut = command_context
            .client
            .sign_and_submit_message(&command_context.tx_author, message::BatchVote {
                dao: self.dao,
                content_ids: self.content_ids.clone(),
            })
            .await?;
        announce_tx("batch voting...");
        let voted = vote_fut.await?;
        transaction_included_ok(&voted)?;
        println!("voted on content {:?} in block {}", self.content_ids, voted.block);
        Ok(())
    }
}
