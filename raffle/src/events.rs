use common::types::RequestId;
use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::json;
use near_sdk::{log, AccountId, Balance};

const EVENT_STANDARD: &str = "raffle";
const EVENT_VERSION: &str = "1.0.0";

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EnteredEvent<'a> {
    pub account_id: &'a AccountId,
    pub amount: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct DrawRequestedEvent {
    pub request_id: RequestId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct WinnerSelectedEvent<'a> {
    pub winner: &'a AccountId,
    pub winner_index: u64,
    pub prize: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct SettlementEvent<'a> {
    pub winner: &'a AccountId,
    pub amount: U128,
    pub request_id: RequestId,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": EVENT_STANDARD,
        "version": EVENT_VERSION,
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn raffle_entered(account_id: &AccountId, amount: Balance) {
    log_event(
        "raffle_entered",
        EnteredEvent {
            account_id,
            amount: U128(amount),
        },
    );
}

pub fn draw_requested(request_id: RequestId) {
    log_event("draw_requested", DrawRequestedEvent { request_id });
}

pub fn winner_selected(winner: &AccountId, winner_index: u64, prize: Balance) {
    log_event(
        "winner_selected",
        WinnerSelectedEvent {
            winner,
            winner_index,
            prize: U128(prize),
        },
    );
}

pub fn settlement_complete(winner: &AccountId, amount: Balance, request_id: RequestId) {
    log_event(
        "settlement_complete",
        SettlementEvent {
            winner,
            amount: U128(amount),
            request_id,
        },
    );
}

pub fn settlement_failed(winner: &AccountId, amount: Balance, request_id: RequestId) {
    log_event(
        "settlement_failed",
        SettlementEvent {
            winner,
            amount: U128(amount),
            request_id,
        },
    );
}
