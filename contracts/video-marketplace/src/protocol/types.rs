use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone, Debug)]
pub enum Action {
    ListVideo {
        video_id: u64,
        price: U128,
        royalty_rate: u32,
    },
    BuyVideo {
        listing_id: u64,
    },
    ResellVideo {
        listing_id: u64,
        new_price: U128,
    },
    DeactivateListing {
        listing_id: u64,
    },
    UpdateListing {
        listing_id: u64,
        update_price: U128,
        update_status: String,
    },
    IncrementViews {
        listing_id: u64,
    },
    LikeVideo {
        listing_id: u64,
    },

    SetAdminPrincipal {
        new_admin: AccountId,
    },
    SetMaxListings {
        max_listings: u64,
    },
    SetPlatformFee {
        platform_fee: U128,
    },
}
