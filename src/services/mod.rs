//! Outbound services used by the relay.

pub mod marketplace;

pub use marketplace::{MarketplaceApiTrait, MarketplaceService, MarketplaceServiceError, RelaySuccess};

#[cfg(test)]
pub use marketplace::MockMarketplaceApiTrait;
