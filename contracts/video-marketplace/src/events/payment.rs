use near_sdk::AccountId;

use super::PAYMENT;
use super::builder::EventBuilder;

pub fn emit_platform_fee_paid(from: &AccountId, to: &AccountId, amount: u128) {
    EventBuilder::new(PAYMENT, "platform_fee_paid", from)
        .field("from", from)
        .field("to", to)
        .field("amount", amount)
        .emit();
}

pub fn emit_deposit_refund(account_id: &AccountId, amount: u128) {
    EventBuilder::new(PAYMENT, "deposit_refund", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}
