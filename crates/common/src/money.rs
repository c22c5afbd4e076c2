use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Money amount backed by exact decimal arithmetic.
///
/// Intermediate amounts (tax in particular) stay unrounded; rounding to
/// currency precision (2 decimal places, half-up) happens only at display
/// time via [`Money::rounded`] or [`std::fmt::Display`], so repeated
/// derivations never accumulate error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a money amount from a raw decimal.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a money amount from cents (e.g., 999 = $9.99).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Creates a money amount from a whole dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self(Decimal::new(dollars, 0))
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the exact, unrounded amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to currency precision (2 decimal
    /// places, midpoint rounded away from zero).
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Multiplies by an arbitrary decimal rate (e.g., a tax rate).
    ///
    /// The result keeps the full precision of the multiplication.
    pub fn times(&self, rate: Decimal) -> Money {
        Self(self.0 * rate)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self.rounded();
        if rounded < Decimal::ZERO {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${rounded:.2}")
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_and_dollars() {
        assert_eq!(Money::from_cents(1234).amount(), Decimal::new(1234, 2));
        assert_eq!(Money::from_dollars(50), Money::from_cents(5000));
    }

    #[test]
    fn display_formatting() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(100).to_string(), "$1.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a.multiply(3), Money::from_cents(3000));
    }

    #[test]
    fn add_and_sub_assign() {
        let mut money = Money::from_cents(100);
        money += Money::from_cents(50);
        assert_eq!(money, Money::from_cents(150));
        money -= Money::from_cents(30);
        assert_eq!(money, Money::from_cents(120));
    }

    #[test]
    fn sign_predicates() {
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(0).is_zero());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn times_keeps_full_precision() {
        // 8% of $10.01 is $0.8008: not representable in cents, exact here.
        let tax = Money::from_cents(1001).times(Decimal::new(8, 2));
        assert_eq!(tax.amount(), Decimal::new(8008, 4));
        assert_eq!(tax.rounded(), Decimal::new(80, 2));
    }

    #[test]
    fn rounded_is_half_up() {
        assert_eq!(
            Money::new(Decimal::new(2345, 3)).rounded(),
            Decimal::new(235, 2)
        );
        assert_eq!(
            Money::new(Decimal::new(-2345, 3)).rounded(),
            Decimal::new(-235, 2)
        );
    }

    #[test]
    fn serialization_roundtrip_is_exact() {
        let money = Money::from_cents(1001).times(Decimal::new(8, 2));
        let json = serde_json::to_string(&money).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(money, deserialized);
    }

    #[test]
    fn comparison_is_numeric() {
        assert!(Money::from_cents(5001) > Money::from_dollars(50));
        assert_eq!(Money::from_cents(5000), Money::from_dollars(50));
    }
}
