use crate::Account;

use serde::{Deserialize, Serialize};

/// One row of the driver's final per-account report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub account: String,
    pub holder: String,
    pub kind: String,
    pub balance: String,
    pub transactions: usize,
}

impl AccountReport {
    pub fn for_account(account: &Account) -> Self {
        Self {
            account: account.number().to_string(),
            holder: account.holder().to_string(),
            kind: account.kind().label().to_string(),
            balance: account.balance().to_string(),
            transactions: account.history().len(),
        }
    }
}
