mod interest;
mod withdrawal;

pub use interest::{InterestPolicy, RiskTier};
pub use withdrawal::{Authorization, DenialReason, WithdrawalPolicy};
