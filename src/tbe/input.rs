use crate::ids::{AccountNumber, CustomerId};
use crate::Result;
use crate::{AccountKind, Money, RiskTier};

use serde::Deserialize;

use thiserror::Error;

/// Represents an input row that a command string would deserialize into.
/// Columns that an op does not use are left empty.
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    pub op: InputOp,

    pub customer: Option<u32>,
    pub account: Option<u64>,
    pub target: Option<u64>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub tier: Option<String>,
    pub pin: Option<u16>,
    pub amount: Option<String>,
    pub symbol: Option<String>,
    pub shares: Option<u32>,
    pub price: Option<String>,
    pub months: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum InputOp {
    Register,
    Open,
    Deposit,
    Withdraw,
    Transfer,
    Interest,
    Buy,
    Sell,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: {0} value missing: {1:?}")]
    MissingField(&'static str, InputEvent),

    #[error("Error parsing input event: unknown account kind {0:?}: {1:?}")]
    UnknownAccountKind(String, InputEvent),

    #[error("Error parsing input event: amounts must be greater than zero: {0:?}")]
    NonPositiveAmount(InputEvent),
}

/// A fully parsed banking command, ready to apply against a `Bank`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register {
        name: String,
        pin: u16,
    },
    Open {
        customer: CustomerId,
        kind: AccountKind,
        opening: Money,
    },
    Deposit {
        account: AccountNumber,
        amount: Money,
    },
    Withdraw {
        account: AccountNumber,
        amount: Money,
    },
    Transfer {
        account: AccountNumber,
        target: AccountNumber,
        amount: Money,
    },
    Interest {
        account: AccountNumber,
        months: u32,
    },
    Buy {
        account: AccountNumber,
        symbol: String,
        shares: u32,
        price: Money,
    },
    Sell {
        account: AccountNumber,
        symbol: String,
        shares: u32,
        price: Money,
    },
}

impl InputEvent {
    pub fn parse_command(self) -> Result<Command> {
        let command = match self.op {
            InputOp::Register => Command::Register {
                name: self
                    .name
                    .clone()
                    .ok_or_else(|| InputParseError::MissingField("name", self.clone()))?,
                pin: self
                    .pin
                    .ok_or_else(|| InputParseError::MissingField("pin", self.clone()))?,
            },

            InputOp::Open => {
                let customer = CustomerId(
                    self.customer
                        .ok_or_else(|| InputParseError::MissingField("customer", self.clone()))?,
                );
                let kind = self.parse_kind()?;

                // Opening balances are not pre-screened for positivity here:
                // zero is a valid opening for most kinds, and the account
                // itself rejects anything its kind does not admit.
                let opening = self.required_amount()?;

                Command::Open {
                    customer,
                    kind,
                    opening,
                }
            }

            InputOp::Deposit => Command::Deposit {
                account: self.required_account()?,
                amount: self.positive_amount()?,
            },

            InputOp::Withdraw => Command::Withdraw {
                account: self.required_account()?,
                amount: self.positive_amount()?,
            },

            InputOp::Transfer => Command::Transfer {
                account: self.required_account()?,
                target: AccountNumber(
                    self.target
                        .ok_or_else(|| InputParseError::MissingField("target", self.clone()))?,
                ),
                amount: self.positive_amount()?,
            },

            InputOp::Interest => Command::Interest {
                account: self.required_account()?,
                months: self
                    .months
                    .ok_or_else(|| InputParseError::MissingField("months", self.clone()))?,
            },

            InputOp::Buy => self.parse_trade(true)?,
            InputOp::Sell => self.parse_trade(false)?,
        };

        Ok(command)
    }

    fn parse_kind(&self) -> Result<AccountKind> {
        let kind = self
            .kind
            .clone()
            .ok_or_else(|| InputParseError::MissingField("kind", self.clone()))?;

        let kind = match kind.trim().to_lowercase().as_str() {
            "basic" => AccountKind::Basic,
            "savings" => AccountKind::savings(),
            "checking" => AccountKind::checking(),
            "investment" => {
                let tier = match self.tier.as_deref() {
                    // No tier given: the standard tier for new accounts.
                    None => Some(RiskTier::Medium),
                    // An unrecognized tier is a recoverable default, never
                    // an error.
                    Some(tier) => RiskTier::parse(tier),
                };

                AccountKind::investment(tier)
            }
            _ => Err(InputParseError::UnknownAccountKind(kind, self.clone()))?,
        };

        Ok(kind)
    }

    fn parse_trade(&self, buying: bool) -> Result<Command> {
        let account = self.required_account()?;
        let symbol = self
            .symbol
            .clone()
            .ok_or_else(|| InputParseError::MissingField("symbol", self.clone()))?;
        let shares = self
            .shares
            .ok_or_else(|| InputParseError::MissingField("shares", self.clone()))?;

        let price = self
            .price
            .clone()
            .ok_or_else(|| InputParseError::MissingField("price", self.clone()))?;
        let price = Money::parse(&price)?;
        if !price.is_positive() {
            Err(InputParseError::NonPositiveAmount(self.clone()))?;
        }

        let command = if buying {
            Command::Buy {
                account,
                symbol,
                shares,
                price,
            }
        } else {
            Command::Sell {
                account,
                symbol,
                shares,
                price,
            }
        };

        Ok(command)
    }

    fn required_account(&self) -> Result<AccountNumber> {
        let account = self
            .account
            .ok_or_else(|| InputParseError::MissingField("account", self.clone()))?;

        Ok(AccountNumber(account))
    }

    fn required_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .clone()
            .ok_or_else(|| InputParseError::MissingField("amount", self.clone()))?;

        Ok(Money::parse(&amount)?)
    }

    /// The external amount screen: ops that move money refuse non-positive
    /// amounts before dispatch. The core re-validates on its own and never
    /// trusts this check.
    fn positive_amount(&self) -> Result<Money> {
        let amount = self.required_amount()?;

        if !amount.is_positive() {
            Err(InputParseError::NonPositiveAmount(self.clone()))?;
        }

        Ok(amount)
    }
}
