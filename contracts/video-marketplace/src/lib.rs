//! OnSocial Video Marketplace: listing ledger for digital video sales, resales and engagement counters.

use near_sdk::{PanicOnDefault, near};

pub mod constants;
mod errors;

mod events;
mod host;
mod ledger;
mod listing;
mod protocol;
mod storage;

mod admin;
mod dispatch;
mod execute;
mod marketplace;
mod upgrade;
mod views;


pub use constants::*;
pub use errors::MarketplaceError;
pub use host::{DepositHost, LedgerHost};
pub use ledger::{Ledger, LedgerConfig, LedgerConfigView};
pub use listing::{Listing, ListingStatus, ListingUpdate};
pub use protocol::Action;
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub ledger: Ledger,
}
