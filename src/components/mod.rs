//! Shared UI components used across pages.

pub mod header;
pub mod login_modal;
pub mod signup_modal;
