use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value};

/// NEP-297 envelope; only ever written to the log.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event<'a> {
    pub(crate) standard: &'static str,
    pub(crate) version: &'static str,
    pub(crate) event: &'static str,
    pub(crate) data: [EventData<'a>; 1],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData<'a> {
    pub(crate) operation: &'static str,
    pub(crate) author: &'a str,
    #[serde(flatten)]
    pub(crate) extra: &'a Map<String, Value>,
}
