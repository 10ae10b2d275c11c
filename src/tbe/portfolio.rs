use crate::{Money, MoneyError};

use rust_decimal::Decimal;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PortfolioError {
    #[error("No shares of {0} are held in this portfolio")]
    UnknownHolding(String),

    #[error("Cannot sell {requested} shares of {symbol}, only {held} held")]
    InsufficientShares {
        symbol: String,
        requested: u32,
        held: u32,
    },

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A stock position: shares held and the average price paid for them.
/// Shares never go negative; a position is removed the moment it hits zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub shares: u32,
    pub cost_basis: Money,
}

#[derive(Debug, Default)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn find(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|holding| holding.symbol == symbol)
    }

    /// Records a purchase. A repeat purchase of the same symbol increments
    /// the existing position, re-averaging its cost basis; nothing is
    /// mutated if the averaging arithmetic fails.
    pub fn buy(&mut self, symbol: &str, shares: u32, price: Money) -> Result<(), PortfolioError> {
        if shares == 0 {
            return Ok(());
        }

        let existing = self
            .holdings
            .iter_mut()
            .find(|holding| holding.symbol == symbol);

        match existing {
            Some(holding) => {
                let held_value = holding.cost_basis.scaled_by(holding.shares)?;
                let mut total_value = price.scaled_by(shares)?;
                total_value.add(&held_value)?;

                let total_shares = holding
                    .shares
                    .checked_add(shares)
                    .ok_or(MoneyError::Overflow("shares", holding.cost_basis, price))?;
                holding.cost_basis = Money(total_value.0 / Decimal::from(total_shares));
                holding.shares = total_shares;
            }
            None => self.holdings.push(Holding {
                symbol: symbol.to_string(),
                shares,
                cost_basis: price,
            }),
        }

        Ok(())
    }

    /// Records a sale, removing the position entirely when its share count
    /// reaches exactly zero.
    pub fn sell(&mut self, symbol: &str, shares: u32) -> Result<(), PortfolioError> {
        let index = self
            .holdings
            .iter()
            .position(|holding| holding.symbol == symbol)
            .ok_or_else(|| PortfolioError::UnknownHolding(symbol.to_string()))?;

        let holding = &mut self.holdings[index];

        if shares > holding.shares {
            return Err(PortfolioError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: shares,
                held: holding.shares,
            });
        }

        holding.shares -= shares;

        if holding.shares == 0 {
            self.holdings.remove(index);
        }

        Ok(())
    }

    /// Total value of all positions at their cost basis.
    pub fn value(&self) -> Result<Money, PortfolioError> {
        let mut total = Money::ZERO;

        for holding in self.holdings.iter() {
            let position_value = holding.cost_basis.scaled_by(holding.shares)?;
            total.add(&position_value)?;
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    const SOME_PRICE: Money = Money(dec!(150));
    const OTHER_PRICE: Money = Money(dec!(2800));

    fn build_portfolio(positions: Vec<(&str, u32, Money)>) -> Portfolio {
        let mut portfolio = Portfolio::new();

        for (symbol, shares, price) in positions.into_iter() {
            portfolio.buy(symbol, shares, price).unwrap();
        }

        portfolio
    }

    #[test]
    fn buy_creates_a_position() {
        let portfolio = build_portfolio(vec![("AAPL", 5, SOME_PRICE)]);

        assert_eq!(
            portfolio.holdings(),
            &[Holding {
                symbol: "AAPL".to_string(),
                shares: 5,
                cost_basis: SOME_PRICE,
            }]
        );
    }

    #[test]
    fn repeat_buy_averages_the_cost_basis() {
        let portfolio = build_portfolio(vec![
            ("AAPL", 5, Money(dec!(150))),
            ("AAPL", 5, Money(dec!(250))),
        ]);

        // (5*150 + 5*250) / 10 = 200
        assert_eq!(
            portfolio.find("AAPL"),
            Some(&Holding {
                symbol: "AAPL".to_string(),
                shares: 10,
                cost_basis: Money(dec!(200)),
            })
        );
    }

    #[test]
    fn sell_decrements_and_removes_at_zero() {
        let mut portfolio = build_portfolio(vec![("AAPL", 5, SOME_PRICE), ("GOOGL", 2, OTHER_PRICE)]);

        portfolio.sell("AAPL", 3).unwrap();
        assert_eq!(portfolio.find("AAPL").map(|holding| holding.shares), Some(2));

        portfolio.sell("AAPL", 2).unwrap();
        assert_eq!(portfolio.find("AAPL"), None);
        assert_eq!(portfolio.holdings().len(), 1);
    }

    #[test]
    fn sell_unknown_symbol() {
        let mut portfolio = build_portfolio(vec![("AAPL", 5, SOME_PRICE)]);

        let res = portfolio.sell("TSLA", 1);
        assert_eq!(res, Err(PortfolioError::UnknownHolding("TSLA".to_string())));
    }

    #[test]
    fn sell_more_than_held_leaves_holdings_unchanged() {
        let mut portfolio = build_portfolio(vec![("AAPL", 5, SOME_PRICE)]);

        let res = portfolio.sell("AAPL", 6);
        assert_eq!(
            res,
            Err(PortfolioError::InsufficientShares {
                symbol: "AAPL".to_string(),
                requested: 6,
                held: 5,
            })
        );
        assert_eq!(portfolio.find("AAPL").map(|holding| holding.shares), Some(5));
    }

    #[test]
    fn value_sums_positions_at_cost_basis() {
        let portfolio = build_portfolio(vec![("AAPL", 5, SOME_PRICE), ("GOOGL", 2, OTHER_PRICE)]);

        // 5*150 + 2*2800 = 6350
        assert_eq!(portfolio.value(), Ok(Money(dec!(6350))));
    }

    #[test]
    fn empty_portfolio_values_to_zero() {
        assert_eq!(Portfolio::new().value(), Ok(Money::ZERO));
    }
}
