use crate::*;

#[test]
fn error_codes_are_stable() {
    let all = [
        MarketplaceError::NotAuthorized,
        MarketplaceError::InvalidVideoId,
        MarketplaceError::InvalidPrice,
        MarketplaceError::ListingNotFound,
        MarketplaceError::ListingInactive,
        MarketplaceError::AlreadyOwner,
        MarketplaceError::PaymentFailed,
        MarketplaceError::AccessDenied,
        MarketplaceError::InvalidListingId,
        MarketplaceError::RoyaltyFailed,
        MarketplaceError::RewardsFailed,
        MarketplaceError::InvalidOwner,
        MarketplaceError::GenerateKeyFailed,
        MarketplaceError::InvalidCreator,
        MarketplaceError::DuplicateListing,
        MarketplaceError::InvalidStatus,
        MarketplaceError::MaxListingsExceeded,
        MarketplaceError::InvalidUpdateParam,
        MarketplaceError::UpdateNotAllowed,
    ];
    for (offset, err) in all.iter().enumerate() {
        assert_eq!(err.code(), 100 + offset as u32);
    }
}

#[test]
fn display_includes_code() {
    assert_eq!(
        MarketplaceError::DuplicateListing.to_string(),
        "Video is already listed (code 114)"
    );
    assert_eq!(
        MarketplaceError::AccessDenied.to_string(),
        "Access denied (code 107)"
    );
}

#[test]
fn status_parsing() {
    assert_eq!(
        ListingStatus::parse_settable("pending"),
        Ok(ListingStatus::Pending)
    );
    assert_eq!(
        ListingStatus::parse_settable("inactive"),
        Err(MarketplaceError::InvalidStatus)
    );
    assert_eq!(ListingStatus::Inactive.as_str(), "inactive");
}

#[test]
fn status_serializes_lowercase() {
    let json = near_sdk::serde_json::to_string(&ListingStatus::Sold).unwrap();
    assert_eq!(json, "\"sold\"");
}
