use near_sdk::AccountId;

use super::LISTING;
use super::builder::EventBuilder;

pub fn emit_listing_created(
    creator_id: &AccountId,
    listing_id: u64,
    video_id: u64,
    price: u128,
    royalty_rate: u8,
    platform_fee: u128,
) {
    EventBuilder::new(LISTING, "list", creator_id)
        .field("listing_id", listing_id)
        .field("video_id", video_id)
        .field("price", price)
        .field("royalty_rate", royalty_rate as u32)
        .field("platform_fee", platform_fee)
        .emit();
}

pub fn emit_listing_bought(buyer_id: &AccountId, seller_id: &AccountId, listing_id: u64, price: u128) {
    EventBuilder::new(LISTING, "buy", buyer_id)
        .field("listing_id", listing_id)
        .field("seller_id", seller_id)
        .field("buyer_id", buyer_id)
        .field("price", price)
        .emit();
}

pub fn emit_listing_resold(owner_id: &AccountId, listing_id: u64, old_price: u128, new_price: u128) {
    EventBuilder::new(LISTING, "resell", owner_id)
        .field("listing_id", listing_id)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}

pub fn emit_listing_deactivated(actor_id: &AccountId, listing_id: u64) {
    EventBuilder::new(LISTING, "deactivate", actor_id)
        .field("listing_id", listing_id)
        .emit();
}

pub fn emit_listing_updated(creator_id: &AccountId, listing_id: u64, price: u128, status: &str) {
    EventBuilder::new(LISTING, "update", creator_id)
        .field("listing_id", listing_id)
        .field("price", price)
        .field("status", status)
        .emit();
}

pub fn emit_listing_viewed(owner_id: &AccountId, listing_id: u64, views: u64) {
    EventBuilder::new(LISTING, "view", owner_id)
        .field("listing_id", listing_id)
        .field("count", views)
        .emit();
}

pub fn emit_listing_liked(owner_id: &AccountId, listing_id: u64, likes: u64) {
    EventBuilder::new(LISTING, "like", owner_id)
        .field("listing_id", listing_id)
        .field("count", likes)
        .emit();
}
