use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_admin_changed(old_admin: &AccountId, new_admin: &AccountId) {
    EventBuilder::new(CONTRACT, "admin_changed", old_admin)
        .field("old_admin", old_admin)
        .field("new_admin", new_admin)
        .emit();
}

pub fn emit_max_listings_updated(admin_id: &AccountId, old_max: u64, new_max: u64) {
    EventBuilder::new(CONTRACT, "max_listings_updated", admin_id)
        .field("old_max_listings", old_max)
        .field("new_max_listings", new_max)
        .emit();
}

pub fn emit_platform_fee_updated(admin_id: &AccountId, old_fee: u128, new_fee: u128) {
    EventBuilder::new(CONTRACT, "platform_fee_updated", admin_id)
        .field("old_fee", old_fee)
        .field("new_fee", new_fee)
        .emit();
}
