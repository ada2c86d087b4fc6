//! HTTP controllers with the endpoint translation logic.

pub mod health;
pub mod marketplace;
