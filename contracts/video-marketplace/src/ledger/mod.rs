//! The listing state machine. Every operation validates completely before it
//! writes, and writes replace whole records.

mod admin;
mod engagement;
mod listing;
mod purchase;
mod views;

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use crate::listing::{Listing, ListingUpdate};
use crate::storage::StorageKey;
use crate::{DEFAULT_MAX_LISTINGS, DEFAULT_PLATFORM_FEE, MarketplaceError};

pub use views::LedgerConfigView;

/// Init-time configuration; omitted fields fall back to the defaults.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    #[serde(default = "default_max_listings")]
    pub max_listings: u64,
    #[serde(default = "default_platform_fee")]
    pub platform_fee: U128,
}

fn default_max_listings() -> u64 {
    DEFAULT_MAX_LISTINGS
}

fn default_platform_fee() -> U128 {
    U128(DEFAULT_PLATFORM_FEE)
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_listings: DEFAULT_MAX_LISTINGS,
            platform_fee: U128(DEFAULT_PLATFORM_FEE),
        }
    }
}

#[near(serializers = [borsh])]
pub struct Ledger {
    pub admin_id: AccountId,
    /// Next id to assign; equals the number of listings ever created.
    pub listing_counter: u64,
    pub max_listings: u64,
    pub platform_fee: u128,
    pub(crate) listings: LookupMap<u64, Listing>,
    pub(crate) listing_updates: LookupMap<u64, ListingUpdate>,
    // Never pruned: a video id stays claimed after its listing is deactivated.
    pub(crate) listings_by_video: LookupMap<u64, u64>,
}

impl Ledger {
    pub fn new(admin_id: AccountId, config: LedgerConfig) -> Result<Self, MarketplaceError> {
        if config.max_listings == 0 {
            return Err(MarketplaceError::InvalidUpdateParam);
        }
        Ok(Self {
            admin_id,
            listing_counter: 0,
            max_listings: config.max_listings,
            platform_fee: config.platform_fee.0,
            listings: LookupMap::new(StorageKey::Listings),
            listing_updates: LookupMap::new(StorageKey::ListingUpdates),
            listings_by_video: LookupMap::new(StorageKey::ListingsByVideo),
        })
    }

    pub(crate) fn check_admin(&self, actor_id: &AccountId) -> Result<(), MarketplaceError> {
        if actor_id != &self.admin_id {
            return Err(MarketplaceError::NotAuthorized);
        }
        Ok(())
    }

    /// Owned copy of the stored record; callers modify it and write it back whole.
    pub(crate) fn load_listing(&self, listing_id: u64) -> Result<Listing, MarketplaceError> {
        self.listings
            .get(&listing_id)
            .cloned()
            .ok_or(MarketplaceError::ListingNotFound)
    }

    pub(crate) fn store_listing(&mut self, listing_id: u64, listing: Listing) {
        self.listings.insert(listing_id, listing);
    }
}
