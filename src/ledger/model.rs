use super::block::Block;
use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// The node's ledger: the chain itself plus the pool of transactions
/// accepted but not yet sealed into a block.
#[derive(Debug)]
pub struct Ledger {
    pub chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Ledger {
    /// Start a ledger with its genesis block.
    pub fn new() -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.new_block(GENESIS_PROOF, Some(GENESIS_PREVIOUS_HASH.to_string()));
        ledger
    }

    /// Queue a transaction for the next sealed block. Returns the index of
    /// the block that will contain it.
    pub fn new_transaction(&mut self, sender: String, recipient: String, amount: i64) -> u64 {
        self.pending.push(Transaction {
            sender,
            recipient,
            amount,
        });
        self.last_block().index + 1
    }

    /// Seal the pending pool into a new block and append it to the chain.
    /// `previous_hash` defaults to the digest of the current tip.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = previous_hash.unwrap_or_else(|| self.last_block().digest());
        let block = Block::new(
            self.chain.len() as u64 + 1,
            std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        );
        self.chain.push(block);
        self.last_block()
    }

    /// The current tip.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger should always have at least the genesis block")
    }

    /// Adopt a peer chain wholesale. The pending pool is kept as-is.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
}
