use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::Ledger;
use crate::host::LedgerHost;
use crate::listing::{Listing, ListingStatus, ListingUpdate};
use crate::{MAX_ROYALTY_RATE, MarketplaceError, events};

impl Ledger {
    /// Creates a listing owned by `actor_id` and returns its id.
    ///
    /// The platform fee is moved to the admin before any record is written;
    /// a refused transfer aborts the call with state untouched.
    pub fn list_video(
        &mut self,
        host: &mut impl LedgerHost,
        actor_id: &AccountId,
        video_id: u64,
        price: u128,
        royalty_rate: u32,
    ) -> Result<u64, MarketplaceError> {
        if self.listing_counter >= self.max_listings {
            return Err(MarketplaceError::MaxListingsExceeded);
        }
        if video_id == 0 {
            return Err(MarketplaceError::InvalidVideoId);
        }
        if price == 0 {
            return Err(MarketplaceError::InvalidPrice);
        }
        let royalty_rate = match u8::try_from(royalty_rate) {
            Ok(rate) if rate <= MAX_ROYALTY_RATE => rate,
            _ => return Err(MarketplaceError::InvalidUpdateParam),
        };
        if self.listings_by_video.contains_key(&video_id) {
            return Err(MarketplaceError::DuplicateListing);
        }

        host.transfer(self.platform_fee, actor_id, &self.admin_id)?;

        let listing_id = self.listing_counter;
        let listing = Listing {
            video_id,
            creator: actor_id.clone(),
            owner: actor_id.clone(),
            price: U128(price),
            is_active: true,
            status: ListingStatus::Active,
            timestamp: host.block_height(),
            royalty_rate,
            views: 0,
            likes: 0,
        };
        self.store_listing(listing_id, listing);
        self.listings_by_video.insert(video_id, listing_id);
        self.listing_counter += 1;

        events::emit_listing_created(
            actor_id,
            listing_id,
            video_id,
            price,
            royalty_rate,
            self.platform_fee,
        );
        Ok(listing_id)
    }

    /// Owner or creator may pull an active listing off the market.
    pub fn deactivate_listing(
        &mut self,
        host: &impl LedgerHost,
        actor_id: &AccountId,
        listing_id: u64,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self.load_listing(listing_id)?;
        if actor_id != &listing.owner && actor_id != &listing.creator {
            return Err(MarketplaceError::NotAuthorized);
        }
        if !listing.is_active {
            return Err(MarketplaceError::ListingInactive);
        }

        listing.is_active = false;
        listing.status = ListingStatus::Inactive;
        listing.timestamp = host.block_height();
        self.store_listing(listing_id, listing);

        events::emit_listing_deactivated(actor_id, listing_id);
        Ok(())
    }

    /// Creator-only edit of price and status. Leaves `is_active` as it is.
    pub fn update_listing(
        &mut self,
        host: &impl LedgerHost,
        actor_id: &AccountId,
        listing_id: u64,
        update_price: u128,
        update_status: &str,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self.load_listing(listing_id)?;
        if actor_id != &listing.creator {
            return Err(MarketplaceError::NotAuthorized);
        }
        if update_price == 0 {
            return Err(MarketplaceError::InvalidPrice);
        }
        let status = ListingStatus::parse_settable(update_status)?;

        let height = host.block_height();
        listing.price = U128(update_price);
        listing.status = status;
        listing.timestamp = height;
        self.store_listing(listing_id, listing);
        self.listing_updates.insert(
            listing_id,
            ListingUpdate {
                update_price: U128(update_price),
                update_status: status,
                update_timestamp: height,
                updater: actor_id.clone(),
            },
        );

        events::emit_listing_updated(actor_id, listing_id, update_price, status.as_str());
        Ok(())
    }
}
