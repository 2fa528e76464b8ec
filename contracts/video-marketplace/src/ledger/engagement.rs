use near_sdk::AccountId;

use super::Ledger;
use crate::listing::Listing;
use crate::{MarketplaceError, events};

impl Ledger {
    pub fn increment_views(
        &mut self,
        actor_id: &AccountId,
        listing_id: u64,
    ) -> Result<u64, MarketplaceError> {
        let views = self.bump_counter(actor_id, listing_id, |listing| &mut listing.views)?;
        events::emit_listing_viewed(actor_id, listing_id, views);
        Ok(views)
    }

    pub fn like_video(
        &mut self,
        actor_id: &AccountId,
        listing_id: u64,
    ) -> Result<u64, MarketplaceError> {
        let likes = self.bump_counter(actor_id, listing_id, |listing| &mut listing.likes)?;
        events::emit_listing_liked(actor_id, listing_id, likes);
        Ok(likes)
    }

    // Owner-gated; the block height stamp is left alone.
    fn bump_counter(
        &mut self,
        actor_id: &AccountId,
        listing_id: u64,
        counter: impl FnOnce(&mut Listing) -> &mut u64,
    ) -> Result<u64, MarketplaceError> {
        let mut listing = self.load_listing(listing_id)?;
        if actor_id != &listing.owner {
            return Err(MarketplaceError::AccessDenied);
        }
        let slot = counter(&mut listing);
        *slot = slot.saturating_add(1);
        let value = *slot;
        self.store_listing(listing_id, listing);
        Ok(value)
    }
}
