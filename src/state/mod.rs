//! Application state: session lifecycle, checkout order, confirmation.

pub mod checkout;
pub mod confirm;
pub mod session;
