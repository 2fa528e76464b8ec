use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use super::Ledger;
use crate::listing::{Listing, ListingUpdate};

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfigView {
    pub admin_id: AccountId,
    pub max_listings: u64,
    pub platform_fee: U128,
    pub listing_counter: u64,
}

impl Ledger {
    pub fn get_listing(&self, listing_id: u64) -> Option<Listing> {
        self.listings.get(&listing_id).cloned()
    }

    pub fn get_listing_count(&self) -> u64 {
        self.listing_counter
    }

    pub fn get_listing_update(&self, listing_id: u64) -> Option<ListingUpdate> {
        self.listing_updates.get(&listing_id).cloned()
    }

    pub fn get_listing_id_by_video(&self, video_id: u64) -> Option<u64> {
        self.listings_by_video.get(&video_id).copied()
    }

    pub fn get_config(&self) -> LedgerConfigView {
        LedgerConfigView {
            admin_id: self.admin_id.clone(),
            max_listings: self.max_listings,
            platform_fee: U128(self.platform_fee),
            listing_counter: self.listing_counter,
        }
    }
}
