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

//! Define the commands supported by the CLI.

use crate::{CommandContext, CommandError, CommandT};
use aigen_dao_client::*;
use structopt::StructOpt;

pub mod account;
pub mod content;
pub mod dao;
pub mod demo;
pub mod other;
pub mod token;

fn announce_tx(msg: &str) {
    println!("{}", msg);
    println!("⏳ Transactions might take a while to be processed. Please wait...");
}

/// Unwrap the result of an included transaction, turning a ledger failure into a
/// [CommandError].
fn transaction_included_ok<Message_: Message>(
    tx_included: &TransactionIncluded<Message_>,
) -> Result<Message_::Output, CommandError>
where
    Message_::Output: Clone,
{
    tx_included.result.clone().map_err(CommandError::from)
}
