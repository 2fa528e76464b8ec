use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

use crate::MarketplaceError;

#[near(serializers = [borsh, json])]
#[serde(rename_all = "lowercase")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Sold,
    Inactive,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Sold => "sold",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    /// Statuses a creator may assign through `update_listing`.
    /// `inactive` is reachable only via deactivation.
    pub fn parse_settable(value: &str) -> Result<Self, MarketplaceError> {
        match value {
            "active" => Ok(Self::Active),
            "sold" => Ok(Self::Sold),
            "pending" => Ok(Self::Pending),
            _ => Err(MarketplaceError::InvalidStatus),
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub video_id: u64,
    pub creator: AccountId,
    pub owner: AccountId,
    pub price: U128,
    pub is_active: bool,
    pub status: ListingStatus,
    /// Block height of the last state-changing mutation.
    pub timestamp: u64,
    pub royalty_rate: u8,
    pub views: u64,
    pub likes: u64,
}

/// Most recent creator edit of a listing; overwritten on every update.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ListingUpdate {
    pub update_price: U128,
    pub update_status: ListingStatus,
    pub update_timestamp: u64,
    pub updater: AccountId,
}
