use near_sdk::json_types::U128;
use near_sdk::{AccountId, env, near};

use crate::*;

#[near]
impl Contract {
    #[init]
    #[handle_result]
    pub fn new(
        admin_id: AccountId,
        config: Option<LedgerConfig>,
    ) -> Result<Self, MarketplaceError> {
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: Ledger::new(admin_id, config.unwrap_or_default())?,
        })
    }

    /// Admin only. The burn account is refused.
    #[handle_result]
    pub fn set_admin_principal(&mut self, new_admin: AccountId) -> Result<(), MarketplaceError> {
        self.ledger
            .set_admin_principal(&env::predecessor_account_id(), new_admin)
    }

    /// Admin only.
    #[handle_result]
    pub fn set_max_listings(&mut self, max_listings: u64) -> Result<(), MarketplaceError> {
        self.ledger
            .set_max_listings(&env::predecessor_account_id(), max_listings)
    }

    /// Admin only. Amount in yoctoNEAR.
    #[handle_result]
    pub fn set_platform_fee(&mut self, platform_fee: U128) -> Result<(), MarketplaceError> {
        self.ledger
            .set_platform_fee(&env::predecessor_account_id(), platform_fee.0)
    }
}
