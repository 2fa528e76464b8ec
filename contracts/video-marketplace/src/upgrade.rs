use near_sdk::{Gas, NearToken, Promise, env, near};

use crate::constants::{GAS_MIGRATE_TGAS, ONE_YOCTO};
use crate::*;

#[near]
impl Contract {
    /// Admin only; reads the new WASM from raw input.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, MarketplaceError> {
        near_sdk::require!(
            env::attached_deposit() == ONE_YOCTO,
            "Attach 1 yoctoNEAR"
        );
        self.ledger.check_admin(&env::predecessor_account_id())?;
        let code = env::input().expect("No input").to_vec();
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read().expect("State read failed");
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
