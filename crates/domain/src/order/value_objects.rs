//! Value objects embedded in orders.

use serde::{Deserialize, Serialize};

/// Shipping address captured at checkout.
///
/// No independent lifecycle; embedded in the order record. All fields
/// are required at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}

impl Address {
    /// Returns the name of the first empty required field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        let fields: [(&'static str, &str); 7] = [
            ("name", &self.name),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("country", &self.country),
            ("phone", &self.phone),
        ];
        fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// How the customer pays.
///
/// Recorded on the order, never executed: payment processing is not this
/// layer's concern. Cash on delivery carries a handling surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "googlepay")]
    GooglePay,
    Cod,
}

impl PaymentMethod {
    /// Returns true if this method carries a handling surcharge.
    pub fn has_surcharge(&self) -> bool {
        matches!(self, PaymentMethod::Cod)
    }

    /// Returns the method name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::GooglePay => "googlepay",
            PaymentMethod::Cod => "cod",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "googlepay" => Ok(Self::GooglePay),
            "cod" => Ok(Self::Cod),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
