mod copy_in;
pub use copy_in::CopyIn;

mod insert;
pub use insert::Insert;

mod transaction;
pub use transaction::Transaction;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a multi-row insert or upsert
    Insert(Insert),

    /// Stream rows with the bulk copy protocol
    CopyIn(CopyIn),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),
}
