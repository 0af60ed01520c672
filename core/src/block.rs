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

//! Block headers of the AIGen DAO ledger.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::Hash;

pub type BlockNumber = u64;

/// The header of a ledger block.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct BlockHeader {
    pub parent_hash: Hash,
    pub number: BlockNumber,
}

impl BlockHeader {
    /// The hash of this block, uniquely identifying it.
    pub fn hash(&self) -> Hash {
        Hash::of(self)
    }
}
