//! Fee applied to a charge depending on the payment method it is billed to.

use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    /// `cc`
    Card,
    /// `dd`
    DirectDebit,
}

impl PaymentType {
    /// Returns `None` for types charges cannot be billed to.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "cc" => Some(Self::Card),
            "dd" => Some(Self::DirectDebit),
            _ => None,
        }
    }

    pub fn surcharge_percent(self) -> Decimal {
        match self {
            Self::Card => Decimal::from(10),
            Self::DirectDebit => Decimal::from(7),
        }
    }
}

/// `amount` plus the type's surcharge, rounded to cents.
///
/// `None` when the total does not fit in a `Decimal`.
pub fn apply(amount: Decimal, payment_type: PaymentType) -> Option<Decimal> {
    let surcharge = amount
        .checked_mul(payment_type.surcharge_percent())?
        .checked_div(Decimal::ONE_HUNDRED)?;
    let total = amount.checked_add(surcharge)?;
    Some(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Renders an amount the way charges store it, e.g. `110.00`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}
