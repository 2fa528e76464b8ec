use near_sdk::AccountId;

use super::Ledger;
use crate::{BURN_ACCOUNT_ID, MarketplaceError, events};

impl Ledger {
    pub fn set_admin_principal(
        &mut self,
        actor_id: &AccountId,
        new_admin: AccountId,
    ) -> Result<(), MarketplaceError> {
        self.check_admin(actor_id)?;
        if new_admin.as_str() == BURN_ACCOUNT_ID {
            return Err(MarketplaceError::NotAuthorized);
        }
        let old_admin = std::mem::replace(&mut self.admin_id, new_admin);
        events::emit_admin_changed(&old_admin, &self.admin_id);
        Ok(())
    }

    pub fn set_max_listings(
        &mut self,
        actor_id: &AccountId,
        max_listings: u64,
    ) -> Result<(), MarketplaceError> {
        self.check_admin(actor_id)?;
        if max_listings == 0 {
            return Err(MarketplaceError::InvalidUpdateParam);
        }
        let old_max = self.max_listings;
        self.max_listings = max_listings;
        events::emit_max_listings_updated(actor_id, old_max, max_listings);
        Ok(())
    }

    /// Any fee is accepted, zero included.
    pub fn set_platform_fee(
        &mut self,
        actor_id: &AccountId,
        platform_fee: u128,
    ) -> Result<(), MarketplaceError> {
        self.check_admin(actor_id)?;
        let old_fee = self.platform_fee;
        self.platform_fee = platform_fee;
        events::emit_platform_fee_updated(actor_id, old_fee, platform_fee);
        Ok(())
    }
}
