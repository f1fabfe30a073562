//! Routed pages.

pub mod admin;
pub mod my_page;
pub mod oauth_callback;
pub mod oauth_setup_password;
pub mod payment;
pub mod payment_fail;
pub mod payment_success;
pub mod portal;
