//! Typed error handling for the video marketplace contract.
//!
//! `#[derive(near_sdk::FunctionError)]` lets public methods return
//! `Err(MarketplaceError::Xxx)` under `#[handle_result]`; the SDK then calls
//! `env::panic_str()` with the Display message.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum MarketplaceError {
    NotAuthorized,
    InvalidVideoId,
    InvalidPrice,
    ListingNotFound,
    ListingInactive,
    AlreadyOwner,
    /// Value transfer collaborator refused the movement of funds.
    PaymentFailed,
    AccessDenied,
    InvalidListingId,
    RoyaltyFailed,
    RewardsFailed,
    InvalidOwner,
    GenerateKeyFailed,
    InvalidCreator,
    DuplicateListing,
    InvalidStatus,
    MaxListingsExceeded,
    InvalidUpdateParam,
    UpdateNotAllowed,
}

impl MarketplaceError {
    /// Stable numeric code, shared with off-chain clients.
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized => 100,
            Self::InvalidVideoId => 101,
            Self::InvalidPrice => 102,
            Self::ListingNotFound => 103,
            Self::ListingInactive => 104,
            Self::AlreadyOwner => 105,
            Self::PaymentFailed => 106,
            Self::AccessDenied => 107,
            Self::InvalidListingId => 108,
            Self::RoyaltyFailed => 109,
            Self::RewardsFailed => 110,
            Self::InvalidOwner => 111,
            Self::GenerateKeyFailed => 112,
            Self::InvalidCreator => 113,
            Self::DuplicateListing => 114,
            Self::InvalidStatus => 115,
            Self::MaxListingsExceeded => 116,
            Self::InvalidUpdateParam => 117,
            Self::UpdateNotAllowed => 118,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotAuthorized => "Not authorized",
            Self::InvalidVideoId => "Invalid video id",
            Self::InvalidPrice => "Price must be greater than 0",
            Self::ListingNotFound => "Listing not found",
            Self::ListingInactive => "Listing is not in a valid activity state for this action",
            Self::AlreadyOwner => "Caller already owns this listing",
            Self::PaymentFailed => "Payment failed",
            Self::AccessDenied => "Access denied",
            Self::InvalidListingId => "Invalid listing id",
            Self::RoyaltyFailed => "Royalty payment failed",
            Self::RewardsFailed => "Rewards distribution failed",
            Self::InvalidOwner => "Invalid owner",
            Self::GenerateKeyFailed => "Key generation failed",
            Self::InvalidCreator => "Invalid creator",
            Self::DuplicateListing => "Video is already listed",
            Self::InvalidStatus => "Invalid status",
            Self::MaxListingsExceeded => "Maximum number of listings reached",
            Self::InvalidUpdateParam => "Invalid update parameter",
            Self::UpdateNotAllowed => "Update not allowed",
        }
    }
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message(), self.code())
    }
}
