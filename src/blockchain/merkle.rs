//! # Merkle
//!
//! Commitment to the transactions of a block

use super::Transaction;
use crate::hash::Digest;

use merkle::MerkleTree;
use ring::digest::SHA256;

/// Root of the sha256 merkle tree whose leaves are the encoded `transactions`, in order.
/// A block without transactions commits to the hash of the empty string
pub fn transactions_root(transactions: &[Transaction]) -> Digest {
    let tree = MerkleTree::from_vec(&SHA256, transactions.to_vec());
    let mut root = Digest::default();
    root.copy_from_slice(tree.root_hash());
    root
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::hash::sha256;
    use crate::signer::Address;

    use pretty_assertions::assert_eq;

    #[test]
    fn should_commit_to_transaction_order() {
        let first = Transaction::new(0, 1, 1, Address::from([0x01; 20]));
        let second = Transaction::new(0, 2, 1, Address::from([0x02; 20]));
        let root = transactions_root(&[first.clone(), second.clone()]);
        assert_eq!(root, transactions_root(&[first.clone(), second.clone()]));
        assert_ne!(root, transactions_root(&[second, first.clone()]));
        assert_ne!(root, transactions_root(&[first]));
    }

    #[test]
    fn should_hash_empty_tree() {
        assert_eq!(transactions_root(&[]), sha256(&[]));
    }
}
