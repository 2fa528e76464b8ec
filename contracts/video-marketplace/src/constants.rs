use near_sdk::NearToken;

pub const DEFAULT_MAX_LISTINGS: u64 = 10_000;
/// Flat fee in yoctoNEAR charged per listing and routed to the admin.
pub const DEFAULT_PLATFORM_FEE: u128 = 500;
pub const MAX_ROYALTY_RATE: u8 = 100; // percent

// Implicit all-zero account; nobody holds its key, so admin rights sent there are lost.
pub const BURN_ACCOUNT_ID: &str = "0000000000000000000000000000000000000000000000000000000000000000";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
pub const GAS_MIGRATE_TGAS: u64 = 200;
