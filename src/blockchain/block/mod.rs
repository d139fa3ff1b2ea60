//! # Block
//!
//! block module exposes the Block type and the block components

mod transaction;

pub use transaction::{Transaction, TransactionBuilder};

use super::merkle::transactions_root;
use crate::codec::{
    append_list, decode_list, expect_fields, Decodable, Encodable, Rlp, RlpResult, RlpStream,
};
use crate::hash::{sha256, Digest};

/// A child chain block: the transactions committed at height `number`
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Block {
    /// Block number
    number: u64,
    /// Transactions included in the block
    transactions: Vec<Transaction>,
}

impl Block {
    /// Instantiates a new `Block`
    pub fn new(number: u64, transactions: Vec<Transaction>) -> Self {
        Self {
            number,
            transactions,
        }
    }

    /// Return block number
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Return the transactions in the block
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Calculate the merkle root of the block transactions
    pub fn merkle_root(&self) -> Digest {
        transactions_root(&self.transactions)
    }

    /// Calculate the block hash, which is the message signed when the block is submitted
    pub fn hash(&self) -> Digest {
        let mut header = RlpStream::new_list(2);
        header.append(&self.number);
        header.append(&self.merkle_root().to_vec());
        sha256(&header.out())
    }
}

impl Encodable for Block {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.begin_list(2);
        self.number.rlp_append(stream);
        append_list(stream, &self.transactions);
    }
}

impl Decodable for Block {
    fn rlp_decode(rlp: &Rlp) -> RlpResult<Self> {
        let fields = expect_fields(rlp, 2)?;
        Ok(Self {
            number: u64::rlp_decode(&fields[0])?,
            transactions: decode_list(&fields[1])?,
        })
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::codec::{self, RlpError};
    use crate::signer::{Address, PrivateKey, Secp256k1Signer};

    use pretty_assertions::assert_eq;

    fn transaction(uid: u64) -> Transaction {
        let mut transaction = Transaction::new(0, uid, 1, Address::from([0xaa; 20]));
        transaction
            .sign(&Secp256k1Signer::new(), &PrivateKey::generate())
            .unwrap();
        transaction
    }

    #[test]
    fn should_decode_encoded_block() {
        let block = Block::new(1000, vec![transaction(1), transaction(2)]);
        let decoded: Block = codec::decode(&codec::encode(&block)).unwrap();
        assert_eq!(decoded, block);
        assert_eq!(decoded.number(), 1000);
        assert_eq!(decoded.transactions().len(), 2);
        let empty = Block::new(0, vec![]);
        assert_eq!(codec::decode::<Block>(&codec::encode(&empty)).unwrap(), empty);
    }

    #[test]
    fn should_decode_block_with_extreme_numbers() {
        let mut highest =
            Transaction::new(u64::MAX, u64::MAX, u64::MAX, Address::from([0xff; 20]));
        highest
            .sign(&Secp256k1Signer::new(), &PrivateKey::generate())
            .unwrap();
        let lowest = Transaction::new(0, 0, 0, Address::from([0; 20]));
        let block = Block::new(u64::MAX, vec![highest, lowest]);
        assert_eq!(codec::decode::<Block>(&codec::encode(&block)).unwrap(), block);
        let genesis = Block::new(0, vec![transaction(0)]);
        assert_eq!(codec::decode::<Block>(&codec::encode(&genesis)).unwrap(), genesis);
    }

    #[test]
    fn should_hash_block_contents() {
        let transactions = vec![transaction(1), transaction(2)];
        let block = Block::new(1, transactions.clone());
        assert_eq!(block.hash(), Block::new(1, transactions.clone()).hash());
        assert_ne!(block.hash(), Block::new(2, transactions).hash());
        assert_ne!(block.hash(), Block::new(1, vec![transaction(3)]).hash());
        assert_ne!(block.merkle_root(), Block::new(1, vec![]).merkle_root());
    }

    #[test]
    fn should_reject_transaction_as_block() {
        let bytes = codec::encode(&transaction(1));
        assert_eq!(
            codec::decode::<Block>(&bytes).unwrap_err(),
            RlpError::FieldCount {
                expected: 2,
                found: 5
            }
        );
    }

    #[test]
    fn should_reject_hostile_block_payloads() {
        // transactions is a byte string
        let mut stream = RlpStream::new_list(2);
        stream.append(&1u64).append(&vec![0xc0u8]);
        assert_eq!(
            codec::decode::<Block>(&stream.out()).unwrap_err(),
            RlpError::ExpectedList
        );
        // block claiming a 65535 bytes payload
        assert!(codec::decode::<Block>(&[0xf9, 0xff, 0xff, 0x01, 0xc0]).is_err());
        // a block nested into itself a few thousand times
        let mut data = vec![0xc2, 0x01, 0xc0];
        for _ in 0..5_000 {
            let mut stream = RlpStream::new_list(2);
            stream.append(&1u64).append_raw(&data, 1);
            data = stream.out().to_vec();
        }
        assert!(codec::decode::<Block>(&data).is_err());
        // trailing garbage after a valid block
        let mut bytes = codec::encode(&Block::new(1, vec![]));
        bytes.push(0x00);
        assert_eq!(
            codec::decode::<Block>(&bytes).unwrap_err(),
            RlpError::TrailingBytes(1)
        );
    }
}
