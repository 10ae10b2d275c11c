use rust_decimal::Decimal;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}: {1}")]
    Parse(&'static str, String),
}

/// A signed monetary amount with exact decimal precision.
///
/// All arithmetic is checked: exceeding the decimal range is an error,
/// never a wrap or a silent saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(string.trim())
            .map_err(|_| MoneyError::Parse("Not a decimal amount", string.to_string()))?;

        Ok(Self(amount))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::Overflow("add", *self, *other))?;

        Ok(())
    }

    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = self
            .0
            .checked_sub(other.0)
            .ok_or(MoneyError::Overflow("sub", *self, *other))?;

        Ok(())
    }

    /// Total amount for `count` units priced at `self`.
    pub fn scaled_by(&self, count: u32) -> Result<Self, MoneyError> {
        let count = Decimal::from(count);
        let total = self
            .0
            .checked_mul(count)
            .ok_or(MoneyError::Overflow("scale", *self, Self(count)))?;

        Ok(Self(total))
    }

    /// Interest accrued on `self` at an annual fractional `rate` over `months`.
    pub fn annual_interest(&self, rate: Decimal, months: u32) -> Result<Self, MoneyError> {
        let accrued = self
            .0
            .checked_mul(rate)
            .and_then(|interest| interest.checked_mul(Decimal::from(months)))
            .ok_or(MoneyError::Overflow("interest", *self, Self(rate)))?;

        Ok(Self(accrued / Decimal::from(12)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("150"), Ok(Money(dec!(150))));
        assert_eq!(Money::parse("0.35"), Ok(Money(dec!(0.35))));
        assert_eq!(Money::parse("-42.5"), Ok(Money(dec!(-42.5))));

        assert_eq!(
            Money::parse("one hundred"),
            Err(MoneyError::Parse(
                "Not a decimal amount",
                "one hundred".to_string()
            ))
        );
    }

    #[test]
    fn add() {
        let mut amount = Money(dec!(10));
        amount.add(&Money(dec!(7.5))).unwrap();

        assert_eq!(amount, Money(dec!(17.5)));
    }

    #[test]
    fn add_overflow() {
        let mut amount = Money(Decimal::MAX);

        let res = amount.add(&Money(Decimal::MAX));
        assert_eq!(
            res,
            Err(MoneyError::Overflow(
                "add",
                Money(Decimal::MAX),
                Money(Decimal::MAX)
            ))
        );
    }

    #[test]
    fn sub_below_zero() {
        let mut amount = Money(dec!(100));
        amount.sub(&Money(dec!(150))).unwrap();

        assert_eq!(amount, Money(dec!(-50)));
    }

    #[test]
    fn scaled_by() {
        let price = Money(dec!(150));

        assert_eq!(price.scaled_by(5), Ok(Money(dec!(750))));
        assert_eq!(price.scaled_by(0), Ok(Money::ZERO));
    }

    #[test]
    fn annual_interest() {
        let balance = Money(dec!(6500));

        assert_eq!(
            balance.annual_interest(dec!(0.30), 6),
            Ok(Money(dec!(975.000)))
        );
        assert_eq!(balance.annual_interest(dec!(0), 6), Ok(Money(dec!(0))));
    }
}
