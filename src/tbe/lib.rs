pub mod ids;
pub mod input;

mod account;
mod account_report;
mod bank;
mod customer;
mod ledger;
mod money;
mod policy;
mod portfolio;
mod result;
mod transaction;

pub use account::{Account, AccountError, AccountKind};
pub use account_report::AccountReport;
pub use bank::{Bank, BankError};
pub use customer::{Customer, CustomerError, Pin};
pub use ledger::{Ledger, LedgerError};
pub use money::{Money, MoneyError};
pub use policy::{Authorization, DenialReason, InterestPolicy, RiskTier, WithdrawalPolicy};
pub use portfolio::{Holding, Portfolio, PortfolioError};
pub use result::Result;
pub use transaction::{TransactionKind, TransactionRecord};
