use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::Ledger;
use crate::host::LedgerHost;
use crate::listing::ListingStatus;
use crate::{MarketplaceError, events};

impl Ledger {
    /// Records the ownership transfer only; settlement with the seller happens elsewhere.
    pub fn buy_video(
        &mut self,
        host: &impl LedgerHost,
        actor_id: &AccountId,
        listing_id: u64,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self.load_listing(listing_id)?;
        if !listing.is_active {
            return Err(MarketplaceError::ListingInactive);
        }
        if actor_id == &listing.owner {
            return Err(MarketplaceError::AlreadyOwner);
        }

        let seller_id = std::mem::replace(&mut listing.owner, actor_id.clone());
        let price = listing.price.0;
        listing.is_active = false;
        listing.status = ListingStatus::Sold;
        listing.timestamp = host.block_height();
        self.store_listing(listing_id, listing);

        events::emit_listing_bought(actor_id, &seller_id, listing_id, price);
        Ok(())
    }

    /// Puts a sold (inactive) listing back on the market. An active listing is
    /// rejected with `ListingInactive` rather than re-priced.
    pub fn resell_video(
        &mut self,
        host: &impl LedgerHost,
        actor_id: &AccountId,
        listing_id: u64,
        new_price: u128,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self.load_listing(listing_id)?;
        if actor_id != &listing.owner {
            return Err(MarketplaceError::NotAuthorized);
        }
        if listing.is_active {
            return Err(MarketplaceError::ListingInactive);
        }
        if new_price == 0 {
            return Err(MarketplaceError::InvalidPrice);
        }

        let old_price = std::mem::replace(&mut listing.price, U128(new_price));
        listing.is_active = true;
        listing.status = ListingStatus::Active;
        listing.timestamp = host.block_height();
        self.store_listing(listing_id, listing);

        events::emit_listing_resold(actor_id, listing_id, old_price.0, new_price);
        Ok(())
    }
}
