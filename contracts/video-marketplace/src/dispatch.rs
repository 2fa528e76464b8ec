use near_sdk::AccountId;
use near_sdk::serde_json::Value;

use crate::*;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        host: &mut impl LedgerHost,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketplaceError> {
        let ledger = &mut self.ledger;
        match action {
            Action::ListVideo {
                video_id,
                price,
                royalty_rate,
            } => {
                let listing_id =
                    ledger.list_video(host, actor_id, video_id, price.0, royalty_rate)?;
                Ok(Value::from(listing_id))
            }
            Action::BuyVideo { listing_id } => {
                ledger.buy_video(&*host, actor_id, listing_id)?;
                Ok(Value::Null)
            }
            Action::ResellVideo {
                listing_id,
                new_price,
            } => {
                ledger.resell_video(&*host, actor_id, listing_id, new_price.0)?;
                Ok(Value::Null)
            }
            Action::DeactivateListing { listing_id } => {
                ledger.deactivate_listing(&*host, actor_id, listing_id)?;
                Ok(Value::Null)
            }
            Action::UpdateListing {
                listing_id,
                update_price,
                update_status,
            } => {
                ledger.update_listing(
                    &*host,
                    actor_id,
                    listing_id,
                    update_price.0,
                    &update_status,
                )?;
                Ok(Value::Null)
            }
            Action::IncrementViews { listing_id } => {
                let views = ledger.increment_views(actor_id, listing_id)?;
                Ok(Value::from(views))
            }
            Action::LikeVideo { listing_id } => {
                let likes = ledger.like_video(actor_id, listing_id)?;
                Ok(Value::from(likes))
            }

            Action::SetAdminPrincipal { new_admin } => {
                ledger.set_admin_principal(actor_id, new_admin)?;
                Ok(Value::Null)
            }
            Action::SetMaxListings { max_listings } => {
                ledger.set_max_listings(actor_id, max_listings)?;
                Ok(Value::Null)
            }
            Action::SetPlatformFee { platform_fee } => {
                ledger.set_platform_fee(actor_id, platform_fee.0)?;
                Ok(Value::Null)
            }
        }
    }
}
