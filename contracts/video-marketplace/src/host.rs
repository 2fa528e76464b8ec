//! Collaborators the ledger borrows from its execution environment.

use near_sdk::{AccountId, NearToken, Promise, env};

use crate::MarketplaceError;
use crate::events;

pub trait LedgerHost {
    /// Monotonically non-decreasing; stamped on every state-changing mutation.
    fn block_height(&self) -> u64;

    /// Moves `amount` from `from` to `to`. An error must leave no funds moved.
    fn transfer(
        &mut self,
        amount: u128,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError>;
}

/// NEAR runtime host: fees are drawn from the deposit attached to the current call.
pub struct DepositHost {
    remaining: u128,
}

impl DepositHost {
    pub fn new(attached: u128) -> Self {
        Self { remaining: attached }
    }

    pub fn from_env() -> Self {
        Self::new(env::attached_deposit().as_yoctonear())
    }

    pub fn remaining(&self) -> u128 {
        self.remaining
    }

    /// Returns whatever the call did not spend to `deposit_owner`.
    pub fn refund_unused(self, deposit_owner: &AccountId) {
        if self.remaining > 0 {
            let _ = Promise::new(deposit_owner.clone())
                .transfer(NearToken::from_yoctonear(self.remaining));
            events::emit_deposit_refund(deposit_owner, self.remaining);
        }
    }
}

impl LedgerHost for DepositHost {
    fn block_height(&self) -> u64 {
        env::block_height()
    }

    fn transfer(
        &mut self,
        amount: u128,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if amount == 0 {
            return Ok(());
        }
        if amount > self.remaining {
            return Err(MarketplaceError::PaymentFailed);
        }
        self.remaining -= amount;
        let _ = Promise::new(to.clone()).transfer(NearToken::from_yoctonear(amount));
        events::emit_platform_fee_paid(from, to, amount);
        Ok(())
    }
}
