//! Order records, creation, and lifecycle.

mod factory;
mod ledger;
mod model;
mod status;
mod value_objects;

pub use factory::{DEFAULT_DELIVERY_LEAD_DAYS, OrderFactory};
pub use ledger::OrderLedger;
pub use model::Order;
pub use status::OrderStatus;
pub use value_objects::{Address, PaymentMethod};
