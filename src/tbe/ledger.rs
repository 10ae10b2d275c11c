use crate::{Money, MoneyError, TransactionKind, TransactionRecord};

use thiserror::Error;

use time::OffsetDateTime;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}, amounts must be greater than zero")]
    InvalidAmount(Money),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Bookkeeping engine for one account: a signed balance plus an append-only
/// transaction history.
///
/// The ledger guarantees bookkeeping correctness only. `debit` performs no
/// business-rule check: admissibility belongs to the account and its
/// withdrawal policy, which must be evaluated against `balance()` strictly
/// before the debit, with no other mutation in between.
#[derive(Debug, Default)]
pub struct Ledger {
    balance: Money,
    history: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Ordered, read-only view of every entry ever applied. Entries are never
    /// reordered, pruned, or mutated after the fact.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn deposit(&mut self, amount: Money, description: String) -> Result<(), LedgerError> {
        self.apply(TransactionKind::Deposit, amount, description)
    }

    /// Unconditionally removes `amount` from the balance. The balance is
    /// allowed to go negative here; whether it should have been is decided by
    /// the caller before invoking this.
    pub fn debit(&mut self, amount: Money, description: String) -> Result<(), LedgerError> {
        self.apply(TransactionKind::Withdrawal, amount, description)
    }

    pub fn credit_transfer(&mut self, amount: Money, description: String) -> Result<(), LedgerError> {
        self.apply(TransactionKind::TransferIn, amount, description)
    }

    pub fn debit_transfer(&mut self, amount: Money, description: String) -> Result<(), LedgerError> {
        self.apply(TransactionKind::TransferOut, amount, description)
    }

    fn apply(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: String,
    ) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut balance = self.balance;
        if kind.is_credit() {
            balance.add(&amount)?;
        } else {
            balance.sub(&amount)?;
        }

        log::debug!("Applying {kind} of {amount}; new balance: {balance}");

        self.history.push(TransactionRecord {
            seq: self.history.len() as u64 + 1,
            kind,
            amount,
            description,
            resulting_balance: balance,
            timestamp: OffsetDateTime::now_utc(),
        });
        self.balance = balance;

        Ok(())
    }
}
