//! Listing lifecycle entry points; the caller is always the predecessor account.

use near_sdk::json_types::U128;
use near_sdk::{env, near};

use crate::*;

#[near]
impl Contract {
    /// Attach at least the platform fee; the excess is refunded.
    #[payable]
    #[handle_result]
    pub fn list_video(
        &mut self,
        video_id: u64,
        price: U128,
        royalty_rate: u32,
    ) -> Result<u64, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        let mut host = DepositHost::from_env();
        let listing_id =
            self.ledger
                .list_video(&mut host, &actor_id, video_id, price.0, royalty_rate)?;
        host.refund_unused(&actor_id);
        Ok(listing_id)
    }

    #[handle_result]
    pub fn buy_video(&mut self, listing_id: u64) -> Result<(), MarketplaceError> {
        self.ledger.buy_video(
            &DepositHost::from_env(),
            &env::predecessor_account_id(),
            listing_id,
        )
    }

    #[handle_result]
    pub fn resell_video(&mut self, listing_id: u64, new_price: U128) -> Result<(), MarketplaceError> {
        self.ledger.resell_video(
            &DepositHost::from_env(),
            &env::predecessor_account_id(),
            listing_id,
            new_price.0,
        )
    }

    #[handle_result]
    pub fn deactivate_listing(&mut self, listing_id: u64) -> Result<(), MarketplaceError> {
        self.ledger.deactivate_listing(
            &DepositHost::from_env(),
            &env::predecessor_account_id(),
            listing_id,
        )
    }

    /// Creator only. `update_status` must be `active`, `sold` or `pending`.
    #[handle_result]
    pub fn update_listing(
        &mut self,
        listing_id: u64,
        update_price: U128,
        update_status: String,
    ) -> Result<(), MarketplaceError> {
        self.ledger.update_listing(
            &DepositHost::from_env(),
            &env::predecessor_account_id(),
            listing_id,
            update_price.0,
            &update_status,
        )
    }

    /// Owner only. Returns the new view count.
    #[handle_result]
    pub fn increment_views(&mut self, listing_id: u64) -> Result<u64, MarketplaceError> {
        self.ledger
            .increment_views(&env::predecessor_account_id(), listing_id)
    }

    /// Owner only. Returns the new like count.
    #[handle_result]
    pub fn like_video(&mut self, listing_id: u64) -> Result<u64, MarketplaceError> {
        self.ledger
            .like_video(&env::predecessor_account_id(), listing_id)
    }
}
