use near_sdk::serde_json::Value;
use near_sdk::{env, near};

use crate::*;

#[near]
impl Contract {
    /// Single entry point for every ledger action; the caller is the predecessor.
    /// Unspent deposit is refunded once the action succeeds.
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, action: Action) -> Result<Value, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        let mut host = DepositHost::from_env();
        let result = self.dispatch_action(&mut host, action, &actor_id)?;
        host.refund_unused(&actor_id);
        Ok(result)
    }
}
