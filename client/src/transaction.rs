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

//! Provides [Transaction] and [TransactionExtra].
use core::marker::PhantomData;
use parity_scale_codec::{Decode, Encode};

use crate::message::Message;
use crate::TxHash;
use aigen_dao_core::crypto;
use aigen_dao_core::message::Call;
use aigen_dao_core::state::AccountTransactionIndex;
use aigen_dao_core::{AccountId, Hash};

/// Transaction that can be submitted to the ledger.
///
/// A transaction includes
/// * the author
/// * the ledger message
/// * extra data like the genesis hash and account nonce
/// * a valid signature
///
/// The transaction type is generic over the ledger message parameter which must
/// implement [Message].
///
/// A transaction can be created with [Transaction::new_signed]. The necessary
/// transaction data must be obtained from the client with [crate::ClientT::account_nonce]
/// and [crate::ClientT::genesis_hash].
#[derive(Clone, Debug)]
pub struct Transaction<Message_: Message> {
    _phantom_data: PhantomData<Message_>,
    pub(crate) signed: SignedTransaction,
}

impl<Message_: Message> Transaction<Message_> {
    /// Create and sign a transaction for the given message.
    pub fn new_signed(
        signer: &crypto::Pair,
        message: Message_,
        transaction_extra: TransactionExtra,
    ) -> Self {
        let signed = SignedTransaction::new_signed(signer, message.into_call(), transaction_extra);
        Transaction {
            _phantom_data: PhantomData,
            signed,
        }
    }

    pub fn hash(&self) -> TxHash {
        self.signed.hash()
    }
}

/// The data that is required from the ledger state to create a valid transaction.
#[derive(Copy, Clone, Debug)]
pub struct TransactionExtra {
    /// The nonce of the account that is the transaction author.
    pub nonce: AccountTransactionIndex,
    pub genesis_hash: Hash,
}

/// Wire form of a signed transaction.
///
/// The signature covers the SCALE encoding of the call, the nonce and the genesis hash,
/// binding the transaction to one chain and one position in the author's transaction
/// sequence.
#[derive(Encode, Decode, Clone, Debug)]
pub struct SignedTransaction {
    pub author: AccountId,
    pub call: Call,
    pub nonce: AccountTransactionIndex,
    pub genesis_hash: Hash,
    pub signature: crypto::Signature,
}

impl SignedTransaction {
    pub fn new_signed(signer: &crypto::Pair, call: Call, extra: TransactionExtra) -> Self {
        let payload = signing_payload(&call, &extra);
        let signature = signer.sign(&payload);
        SignedTransaction {
            author: signer.public(),
            call,
            nonce: extra.nonce,
            genesis_hash: extra.genesis_hash,
            signature,
        }
    }

    /// Verify that the signature is valid for the transaction data and author.
    pub fn verify(&self) -> bool {
        let extra = TransactionExtra {
            nonce: self.nonce,
            genesis_hash: self.genesis_hash,
        };
        let payload = signing_payload(&self.call, &extra);
        self.author.verify(&payload, &self.signature)
    }

    pub fn hash(&self) -> TxHash {
        Hash::of(self)
    }
}

fn signing_payload(call: &Call, extra: &TransactionExtra) -> Vec<u8> {
    (call, extra.nonce, extra.genesis_hash).encode()
}

#[cfg(test)]
mod test {
    use super::*;
    use aigen_dao_core::message;

    fn transfer_transaction(signer: &crypto::Pair) -> SignedTransaction {
        SignedTransaction::new_signed(
            signer,
            message::Transfer {
                token: Hash::random(),
                recipient: signer.public().address(),
                amount: 1000,
            }
            .into(),
            TransactionExtra {
                nonce: 0,
                genesis_hash: Hash::random(),
            },
        )
    }

    #[test]
    /// Assert that signed transactions pass signature verification.
    fn check_signed_transaction() {
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let signed_tx = transfer_transaction(&alice);
        assert!(signed_tx.verify());
    }

    #[test]
    /// Assert that tampering with the transaction data invalidates the signature.
    fn check_tampered_transaction() {
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let mut signed_tx = transfer_transaction(&alice);
        signed_tx.nonce += 1;
        assert!(!signed_tx.verify());
    }

    #[test]
    /// Check that a signed transaction's hash equals the hash of its wire form.
    fn check_transaction_hash() {
        let alice = crypto::Pair::from_string("//Alice").unwrap();
        let signed_tx = Transaction::<message::Transfer>::new_signed(
            &alice,
            message::Transfer {
                token: Hash::random(),
                recipient: alice.public().address(),
                amount: 1000,
            },
            TransactionExtra {
                nonce: 0,
                genesis_hash: Hash::random(),
            },
        );
        assert_eq!(signed_tx.hash(), Hash::of(&signed_tx.signed));
    }
}
