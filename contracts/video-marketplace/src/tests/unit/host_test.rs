use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- DepositHost ---

#[test]
fn deposit_host_draws_from_attached_deposit() {
    testing_env!(context_with_deposit(creator(), 800).build());
    let mut host = DepositHost::from_env();

    host.transfer(500, &creator(), &admin()).unwrap();

    assert_eq!(host.remaining(), 300);
    let events = event_logs();
    assert_eq!(events[0]["data"][0]["operation"], "platform_fee_paid");
    assert_eq!(events[0]["data"][0]["from"], creator().as_str());
}

#[test]
fn deposit_host_refuses_overdraw() {
    testing_env!(context_with_deposit(creator(), 499).build());
    let mut host = DepositHost::from_env();

    let err = host.transfer(500, &creator(), &admin()).unwrap_err();

    assert_eq!(err, MarketplaceError::PaymentFailed);
    assert_eq!(host.remaining(), 499);
    assert!(event_logs().is_empty());
}

#[test]
fn deposit_host_zero_transfer_is_noop() {
    testing_env!(context(creator()).build());
    let mut host = DepositHost::from_env();

    host.transfer(0, &creator(), &admin()).unwrap();

    assert_eq!(host.remaining(), 0);
    assert!(event_logs().is_empty());
}

#[test]
fn deposit_host_reports_block_height() {
    let mut ctx = context(creator());
    ctx.block_height(4_242);
    testing_env!(ctx.build());

    assert_eq!(DepositHost::from_env().block_height(), 4_242);
}

#[test]
fn refund_skipped_when_nothing_left() {
    testing_env!(context_with_deposit(creator(), 500).build());
    let mut host = DepositHost::new(500);
    host.transfer(500, &creator(), &admin()).unwrap();

    host.refund_unused(&creator());

    let events = event_logs();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["data"][0]["operation"], "platform_fee_paid");
}
