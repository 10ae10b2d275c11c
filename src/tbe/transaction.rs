use crate::Money;

use std::fmt;

use time::OffsetDateTime;

/// A single entry in an account's history.
///
/// Records are immutable once created and owned exclusively by the ledger
/// that created them; `resulting_balance` is the ledger balance immediately
/// after this entry was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub seq: u64,
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub resulting_balance: Money,
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
}

impl TransactionKind {
    /// Whether this kind adds money to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Deposit | Self::TransferIn)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::TransferOut => "transfer-out",
            Self::TransferIn => "transfer-in",
        };

        return write!(f, "{name}");
    }
}
