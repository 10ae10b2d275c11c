use crate::ids::AccountNumber;
use crate::{
    Authorization, DenialReason, InterestPolicy, Ledger, LedgerError, Money, MoneyError,
    Portfolio, PortfolioError, RiskTier, TransactionRecord, WithdrawalPolicy,
};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("Withdrawal denied: {0}")]
    PolicyDenied(DenialReason),

    #[error("Invalid opening balance: {opening}, at least {minimum} is required")]
    InvalidOpeningBalance { opening: Money, minimum: Money },

    #[error("Insufficient funds: cost {cost} exceeds balance {balance}")]
    InsufficientFunds { cost: Money, balance: Money },

    #[error("Account {0} is not an investment account")]
    NotAnInvestmentAccount(AccountNumber),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Account type chosen when the account is opened. The choice fixes the
/// withdrawal and interest policies for the whole life of the account; there
/// is no runtime re-typing.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Basic,
    Savings {
        minimum_balance: Money,
        interest_rate: Decimal,
    },
    Checking {
        overdraft_limit: Money,
    },
    Investment {
        risk_tier: Option<RiskTier>,
    },
}

impl AccountKind {
    pub fn savings() -> Self {
        Self::Savings {
            minimum_balance: Money(dec!(100)),
            interest_rate: dec!(0.30),
        }
    }

    pub fn checking() -> Self {
        Self::Checking {
            overdraft_limit: Money(dec!(500)),
        }
    }

    pub fn investment(risk_tier: Option<RiskTier>) -> Self {
        Self::Investment { risk_tier }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Savings { .. } => "savings",
            Self::Checking { .. } => "checking",
            Self::Investment { .. } => "investment",
        }
    }

    fn withdrawal_policy(&self) -> WithdrawalPolicy {
        match self {
            Self::Basic | Self::Investment { .. } => WithdrawalPolicy::Unrestricted,
            Self::Savings {
                minimum_balance, ..
            } => WithdrawalPolicy::MinimumBalance {
                floor: *minimum_balance,
            },
            Self::Checking { overdraft_limit } => WithdrawalPolicy::Overdraft {
                limit: *overdraft_limit,
            },
        }
    }

    fn interest_policy(&self) -> InterestPolicy {
        match self {
            Self::Basic => InterestPolicy::Fixed { rate: dec!(0.25) },
            Self::Savings { interest_rate, .. } => InterestPolicy::Fixed {
                rate: *interest_rate,
            },
            Self::Checking { .. } => InterestPolicy::NoInterest,
            Self::Investment { risk_tier } => InterestPolicy::RiskTiered { tier: *risk_tier },
        }
    }
}

/// Composition root binding one ledger to one withdrawal policy and one
/// interest policy. The ledger guarantees bookkeeping correctness; this type
/// and its policies guarantee business-rule correctness.
#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    kind: AccountKind,
    ledger: Ledger,
    withdrawal_policy: WithdrawalPolicy,
    interest_policy: InterestPolicy,
    portfolio: Option<Portfolio>,
}

impl Account {
    /// Opens an account with an opening balance, recorded as the ledger's
    /// first entry. Savings accounts refuse an opening balance below their
    /// minimum-balance floor; every kind refuses a negative one, since a
    /// balance that history cannot replay is not allowed to exist.
    pub fn open(
        number: AccountNumber,
        holder: &str,
        opening_balance: Money,
        kind: AccountKind,
    ) -> Result<Self, AccountError> {
        let minimum = match &kind {
            AccountKind::Savings {
                minimum_balance, ..
            } => *minimum_balance,
            _ => Money::ZERO,
        };

        if opening_balance < minimum {
            return Err(AccountError::InvalidOpeningBalance {
                opening: opening_balance,
                minimum,
            });
        }

        let mut ledger = Ledger::new();
        if opening_balance.is_positive() {
            ledger.deposit(opening_balance, format!("{holder} opening deposit"))?;
        }

        let portfolio = match &kind {
            AccountKind::Investment { .. } => Some(Portfolio::new()),
            _ => None,
        };

        Ok(Self {
            number,
            holder: holder.to_string(),
            withdrawal_policy: kind.withdrawal_policy(),
            interest_policy: kind.interest_policy(),
            kind,
            ledger,
            portfolio,
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Money {
        self.ledger.balance()
    }

    pub fn history(&self) -> &[TransactionRecord] {
        self.ledger.history()
    }

    /// What could be withdrawn right now under this account's policy; for
    /// overdraft accounts this includes the unused overdraft room.
    pub fn available_funds(&self) -> Money {
        self.withdrawal_policy.available(self.ledger.balance())
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        self.ledger
            .deposit(amount, format!("{} deposited", self.holder))?;

        Ok(())
    }

    /// Policy check and debit form one atomic step: the authorization runs
    /// against the ledger's live balance, and nothing can touch this ledger
    /// between the check and the debit because both happen under this single
    /// `&mut self` borrow. In a multi-actor adaptation, callers must keep
    /// per-account mutual exclusion around the whole method.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        match self.withdrawal_policy.authorize(self.ledger.balance(), amount) {
            Authorization::Denied(reason) => Err(AccountError::PolicyDenied(reason)),
            Authorization::Allowed => {
                self.ledger
                    .debit(amount, format!("{} withdrew", self.holder))?;

                Ok(())
            }
        }
    }

    /// Moves `amount` to `target`. A denial on the source side denies the
    /// whole transfer and leaves the target untouched; once the source debit
    /// has succeeded the credit cannot be refused, since the amount is known
    /// positive, so the two ledgers cannot drift apart.
    pub fn transfer(&mut self, target: &mut Account, amount: Money) -> Result<(), AccountError> {
        self.transfer_out(target.number, amount)?;
        target.transfer_in(self.number, amount)?;

        Ok(())
    }

    pub(crate) fn transfer_out(
        &mut self,
        to: AccountNumber,
        amount: Money,
    ) -> Result<(), AccountError> {
        match self.withdrawal_policy.authorize(self.ledger.balance(), amount) {
            Authorization::Denied(reason) => Err(AccountError::PolicyDenied(reason)),
            Authorization::Allowed => {
                self.ledger
                    .debit_transfer(amount, format!("Transferred to account {to}"))?;

                Ok(())
            }
        }
    }

    pub(crate) fn transfer_in(
        &mut self,
        from: AccountNumber,
        amount: Money,
    ) -> Result<(), AccountError> {
        self.ledger
            .credit_transfer(amount, format!("Received from account {from}"))?;

        Ok(())
    }

    /// Interest accrued over `months` at the account's annual rate. A pure
    /// read: the interest is reported, never credited to the ledger.
    pub fn calculate_interest(&self, months: u32) -> Result<Money, AccountError> {
        let interest = self
            .ledger
            .balance()
            .annual_interest(self.interest_policy.rate(), months)?;

        Ok(interest)
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    pub fn buy_stocks(
        &mut self,
        symbol: &str,
        shares: u32,
        price: Money,
    ) -> Result<(), AccountError> {
        let portfolio = self
            .portfolio
            .as_mut()
            .ok_or(AccountError::NotAnInvestmentAccount(self.number))?;

        let cost = price.scaled_by(shares)?;
        if !cost.is_positive() {
            return Err(LedgerError::InvalidAmount(cost).into());
        }

        let balance = self.ledger.balance();
        if cost > balance {
            return Err(AccountError::InsufficientFunds { cost, balance });
        }

        portfolio.buy(symbol, shares, price)?;
        self.ledger
            .debit(cost, format!("Bought {shares} shares of {symbol}"))?;

        Ok(())
    }

    pub fn sell_stocks(
        &mut self,
        symbol: &str,
        shares: u32,
        price: Money,
    ) -> Result<(), AccountError> {
        let portfolio = self
            .portfolio
            .as_mut()
            .ok_or(AccountError::NotAnInvestmentAccount(self.number))?;

        let proceeds = price.scaled_by(shares)?;
        if !proceeds.is_positive() {
            return Err(LedgerError::InvalidAmount(proceeds).into());
        }

        portfolio.sell(symbol, shares)?;
        self.ledger
            .deposit(proceeds, format!("Sold {shares} shares of {symbol}"))?;

        Ok(())
    }

    pub fn portfolio_value(&self) -> Result<Money, AccountError> {
        let portfolio = self
            .portfolio
            .as_ref()
            .ok_or(AccountError::NotAnInvestmentAccount(self.number))?;

        Ok(portfolio.value()?)
    }
}
