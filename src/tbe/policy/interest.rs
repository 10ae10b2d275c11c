use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Per-account-type annual interest rate selection, as a fraction
/// (0.30 means 30% per year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestPolicy {
    Fixed { rate: Decimal },

    /// Rate keyed on the account's risk tier. An unrecognized tier
    /// (`tier: None`) falls back to a default rate rather than failing.
    RiskTiered { tier: Option<RiskTier> },

    NoInterest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// `None` for anything that is not a known tier name; the caller treats
    /// that as the default tier, never as an error.
    pub fn parse(string: &str) -> Option<Self> {
        match string.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl InterestPolicy {
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Fixed { rate } => *rate,
            Self::RiskTiered { tier } => match tier {
                Some(RiskTier::Low) => dec!(0.20),
                Some(RiskTier::Medium) => dec!(0.35),
                Some(RiskTier::High) => dec!(0.50),
                None => dec!(0.25),
            },
            Self::NoInterest => Decimal::ZERO,
        }
    }
}
