use near_sdk::near;

use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, listing_id: u64) -> Option<Listing> {
        self.ledger.get_listing(listing_id)
    }

    pub fn get_listing_count(&self) -> u64 {
        self.ledger.get_listing_count()
    }

    pub fn get_listing_update(&self, listing_id: u64) -> Option<ListingUpdate> {
        self.ledger.get_listing_update(listing_id)
    }

    pub fn get_listing_id_by_video(&self, video_id: u64) -> Option<u64> {
        self.ledger.get_listing_id_by_video(video_id)
    }

    pub fn get_config(&self) -> LedgerConfigView {
        self.ledger.get_config()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
