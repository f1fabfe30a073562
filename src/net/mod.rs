//! Network layer: REST client, gateway handoff, and wire types.

pub mod api;
pub mod gateway;
pub mod types;
