use crate::Money;

use std::fmt;

/// Per-account-type rule deciding whether a requested withdrawal is
/// admissible. Selected once when the account is opened and never swapped at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    /// Any positive amount may be withdrawn, regardless of balance.
    Unrestricted,

    /// The balance must not drop below `floor`.
    MinimumBalance { floor: Money },

    /// The balance may go negative, down to `-limit`.
    Overdraft { limit: Money },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Allowed,
    Denied(DenialReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    NonPositiveAmount,
    BelowMinimumBalance,
    ExceedsOverdraftLimit,
}

impl WithdrawalPolicy {
    /// Decides whether `requested` may be withdrawn from `current`.
    ///
    /// Callers must pass the ledger's true current balance and perform the
    /// debit before any other mutation of the same ledger; authorizing
    /// against a stale balance read is exactly the bug this contract exists
    /// to rule out.
    pub fn authorize(&self, current: Money, requested: Money) -> Authorization {
        if !requested.is_positive() {
            return Authorization::Denied(DenialReason::NonPositiveAmount);
        }

        match self {
            Self::Unrestricted => Authorization::Allowed,

            Self::MinimumBalance { floor } => {
                let mut remaining = current;
                match remaining.sub(&requested) {
                    Ok(()) if remaining >= *floor => Authorization::Allowed,
                    _ => Authorization::Denied(DenialReason::BelowMinimumBalance),
                }
            }

            Self::Overdraft { limit } => {
                let mut available = current;
                match available.add(limit) {
                    Ok(()) if requested <= available => Authorization::Allowed,
                    _ => Authorization::Denied(DenialReason::ExceedsOverdraftLimit),
                }
            }
        }
    }

    /// The most that could be withdrawn right now under this policy, given
    /// `current`. May be negative when the account is already past its room.
    pub fn available(&self, current: Money) -> Money {
        let mut available = current;

        let res = match self {
            Self::Unrestricted => Ok(()),
            Self::MinimumBalance { floor } => available.sub(floor),
            Self::Overdraft { limit } => available.add(limit),
        };

        match res {
            Ok(()) => available,
            Err(_) => current,
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            Self::NonPositiveAmount => "non-positive amount",
            Self::BelowMinimumBalance => "below minimum balance",
            Self::ExceedsOverdraftLimit => "exceeds overdraft limit",
        };

        return write!(f, "{reason}");
    }
}
