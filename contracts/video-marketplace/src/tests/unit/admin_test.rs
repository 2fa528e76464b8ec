use crate::tests::test_utils::*;
use crate::*;
use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- set_admin_principal ---

#[test]
fn set_admin_principal_happy() {
    let mut ledger = new_ledger();

    ledger.set_admin_principal(&admin(), buyer()).unwrap();

    assert_eq!(ledger.admin_id, buyer());
    // The old admin has lost its rights.
    let err = ledger.set_max_listings(&admin(), 5).unwrap_err();
    assert_eq!(err, MarketplaceError::NotAuthorized);
    ledger.set_max_listings(&buyer(), 5).unwrap();
}

#[test]
fn set_admin_principal_non_admin_fails() {
    let mut ledger = new_ledger();

    let err = ledger.set_admin_principal(&buyer(), buyer()).unwrap_err();
    assert_eq!(err, MarketplaceError::NotAuthorized);
    assert_eq!(ledger.admin_id, admin());
}

#[test]
fn set_admin_principal_burn_account_fails() {
    let mut ledger = new_ledger();
    let burn: AccountId = BURN_ACCOUNT_ID.parse().unwrap();

    let err = ledger.set_admin_principal(&admin(), burn).unwrap_err();
    assert_eq!(err, MarketplaceError::NotAuthorized);
    assert_eq!(ledger.admin_id, admin());
}

#[test]
fn new_admin_receives_platform_fees() {
    let mut ledger = new_ledger();
    let mut host = MockHost::default();
    ledger.set_admin_principal(&admin(), buyer()).unwrap();

    list_as_creator(&mut ledger, &mut host, 1);

    assert_eq!(host.transfers[0].to, buyer());
}

// --- set_max_listings ---

#[test]
fn set_max_listings_happy() {
    let mut ledger = new_ledger();

    ledger.set_max_listings(&admin(), 3).unwrap();

    assert_eq!(ledger.get_config().max_listings, 3);
}

#[test]
fn set_max_listings_zero_fails() {
    let mut ledger = new_ledger();

    let err = ledger.set_max_listings(&admin(), 0).unwrap_err();
    assert_eq!(err, MarketplaceError::InvalidUpdateParam);
    assert_eq!(ledger.max_listings, DEFAULT_MAX_LISTINGS);
}

#[test]
fn set_max_listings_non_admin_fails() {
    let mut ledger = new_ledger();

    // Authorization is checked before the argument.
    let err = ledger.set_max_listings(&creator(), 0).unwrap_err();
    assert_eq!(err, MarketplaceError::NotAuthorized);
}

#[test]
fn lowering_cap_below_counter_blocks_listing() {
    let mut ledger = new_ledger();
    let mut host = MockHost::default();
    list_as_creator(&mut ledger, &mut host, 1);
    list_as_creator(&mut ledger, &mut host, 2);

    ledger.set_max_listings(&admin(), 1).unwrap();

    let err = ledger
        .list_video(&mut host, &creator(), 3, 100, 10)
        .unwrap_err();
    assert_eq!(err, MarketplaceError::MaxListingsExceeded);
    assert_eq!(ledger.get_listing_count(), 2);
}

// --- set_platform_fee ---

#[test]
fn set_platform_fee_happy() {
    let mut ledger = new_ledger();

    ledger.set_platform_fee(&admin(), 1_000).unwrap();

    assert_eq!(ledger.get_config().platform_fee, U128(1_000));
}

#[test]
fn set_platform_fee_zero_allowed() {
    let mut ledger = new_ledger();
    let mut host = MockHost::default();

    ledger.set_platform_fee(&admin(), 0).unwrap();
    list_as_creator(&mut ledger, &mut host, 1);

    assert_eq!(host.transfers[0].amount, 0);
}

#[test]
fn set_platform_fee_non_admin_fails() {
    let mut ledger = new_ledger();

    let err = ledger.set_platform_fee(&buyer(), 1).unwrap_err();
    assert_eq!(err, MarketplaceError::NotAuthorized);
    assert_eq!(ledger.platform_fee, DEFAULT_PLATFORM_FEE);
}

// --- init / config ---

#[test]
fn new_ledger_defaults() {
    let ledger = new_ledger();

    assert_eq!(
        ledger.get_config(),
        LedgerConfigView {
            admin_id: admin(),
            max_listings: DEFAULT_MAX_LISTINGS,
            platform_fee: U128(DEFAULT_PLATFORM_FEE),
            listing_counter: 0,
        }
    );
}

#[test]
fn new_ledger_rejects_zero_cap() {
    testing_env!(context(admin()).build());
    let config = LedgerConfig {
        max_listings: 0,
        platform_fee: U128(1),
    };

    let err = Ledger::new(admin(), config).err().unwrap();
    assert_eq!(err, MarketplaceError::InvalidUpdateParam);
}

#[test]
fn config_json_defaults_missing_fields() {
    let config: LedgerConfig =
        near_sdk::serde_json::from_str(r#"{"platform_fee":"42"}"#).unwrap();

    assert_eq!(config.max_listings, DEFAULT_MAX_LISTINGS);
    assert_eq!(config.platform_fee, U128(42));
}

#[test]
fn admin_change_emits_event() {
    let mut ledger = new_ledger();

    ledger.set_admin_principal(&admin(), creator()).unwrap();

    let events = event_logs();
    let last = events.last().unwrap();
    assert_eq!(last["event"], "CONTRACT_UPDATE");
    assert_eq!(last["data"][0]["operation"], "admin_changed");
    assert_eq!(last["data"][0]["new_admin"], creator().as_str());
}
