use common::selection::winning_index;
use common::types::{RandomWord, RequestId};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use near_sdk::{
    env, ext_contract, near_bindgen, AccountId, Balance, PanicOnDefault, Promise, PromiseError,
};

use errors::RaffleError;
use interfaces::raffle::{Entry, RaffleState, RandomnessConsumer, UpkeepTarget};
use ledger::EntryLedger;

pub mod external;
pub use crate::external::*;

mod errors;
mod events;
mod interfaces;
mod ledger;
mod utils;

#[cfg(test)]
mod test_utils;

const NO_DEPOSIT: Balance = 0;
const RANDOM_WORDS_PER_DRAW: u32 = 1;

/// Snapshot of the round taken before the fulfillment reset. Kept in state
/// until the settlement transfer resolves, so a rejected payout restores
/// the whole round instead of leaving it reset but unpaid.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct SettlementJournal {
    request_id: RequestId,
    pool_balance: Balance,
    entries: Vec<Entry>,
    previous_winner: Option<AccountId>,
    previous_draw_timestamp_ms: u64,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    entrance_fee: Balance,
    interval_ms: u64,
    vrf_provider: AccountId,
    vrf_key: String,
    fulfillment_gas: u64,
    state: RaffleState,
    entries: EntryLedger,
    pool_balance: Balance,
    last_draw_timestamp_ms: u64,
    recent_winner: Option<AccountId>,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    pending_settlement: Option<SettlementJournal>,
}

fn fail(err: RaffleError) -> ! {
    env::panic_str(&err.to_string())
}

#[near_bindgen]
impl Contract {
    /// Configuration is immutable after construction. `vrf_key` and
    /// `fulfillment_gas` are opaque routing parameters forwarded to the
    /// oracle with every request.
    #[init]
    pub fn new(
        entrance_fee: U128,
        interval_seconds: u64,
        vrf_provider: AccountId,
        vrf_key: String,
        fulfillment_gas: u64,
    ) -> Self {
        assert!(entrance_fee.0 > 0, "entrance fee must be positive");
        assert!(interval_seconds > 0, "draw interval must be positive");

        Self {
            entrance_fee: entrance_fee.0,
            interval_ms: interval_seconds * 1_000,
            vrf_provider,
            vrf_key,
            fulfillment_gas,
            state: RaffleState::Open,
            entries: EntryLedger::new(),
            pool_balance: 0,
            last_draw_timestamp_ms: env::block_timestamp_ms(),
            recent_winner: None,
            next_request_id: 0,
            pending_request: None,
            pending_settlement: None,
        }
    }

    /// Registers the caller for the active round with the attached deposit.
    #[payable]
    pub fn enter(&mut self) {
        let account_id = env::predecessor_account_id();
        let amount = env::attached_deposit();

        if let Err(err) = self.try_enter(&account_id, amount) {
            fail(err);
        }
    }

    #[private]
    pub fn on_settlement_transfer(
        &mut self,
        winner: AccountId,
        amount: U128,
        #[callback_result] call_result: Result<(), PromiseError>,
    ) {
        self.finalize_settlement(&winner, amount.0, call_result);
    }

    pub fn get_state(&self) -> RaffleState {
        self.state
    }

    pub fn get_entrance_fee(&self) -> U128 {
        U128(self.entrance_fee)
    }

    pub fn get_interval_seconds(&self) -> u64 {
        self.interval_ms / 1_000
    }

    pub fn get_entry(&self, index: u64) -> Entry {
        self.entries.get(index).unwrap_or_else(|err| fail(err))
    }

    pub fn get_entry_count(&self) -> u64 {
        self.entries.count()
    }

    pub fn get_pool_balance(&self) -> U128 {
        U128(self.pool_balance)
    }

    pub fn get_last_draw_timestamp_ms(&self) -> u64 {
        self.last_draw_timestamp_ms
    }

    pub fn get_recent_winner(&self) -> Option<AccountId> {
        self.recent_winner.clone()
    }

    pub fn get_pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }
}

#[near_bindgen]
impl UpkeepTarget for Contract {
    /// Read-only readiness probe for the external upkeep caller. The
    /// payload is returned unchanged.
    fn check_upkeep(&self, check_data: Option<String>) -> (bool, Option<String>) {
        (self.is_draw_ready(), check_data)
    }

    fn perform_upkeep(&mut self, _perform_data: Option<String>) {
        match self.try_start_draw() {
            Ok(request_id) => {
                ext_vrf::request_random_words(
                    request_id,
                    self.vrf_key.clone(),
                    RANDOM_WORDS_PER_DRAW,
                    self.fulfillment_gas,
                    self.vrf_provider.clone(),
                    NO_DEPOSIT,
                    utils::gas::REQUEST_RANDOM_WORDS,
                );
            }
            Err(err) => fail(err),
        }
    }
}

#[near_bindgen]
impl RandomnessConsumer for Contract {
    fn fulfill_randomness(
        &mut self,
        request_id: RequestId,
        random_words: Vec<RandomWord>,
    ) -> Promise {
        if env::predecessor_account_id() != self.vrf_provider {
            fail(RaffleError::OracleOnly {
                expected: self.vrf_provider.clone(),
            });
        }

        match self.try_fulfill(request_id, &random_words) {
            Ok((winner, prize)) => Promise::new(winner.clone()).transfer(prize).then(
                this_contract::on_settlement_transfer(
                    winner,
                    U128(prize),
                    env::current_account_id(),
                    NO_DEPOSIT,
                    utils::gas::ON_SETTLEMENT_TRANSFER,
                ),
            ),
            Err(err) => fail(err),
        }
    }
}

impl Contract {
    fn is_draw_ready(&self) -> bool {
        self.state == RaffleState::Open
            && env::block_timestamp_ms() >= self.last_draw_timestamp_ms + self.interval_ms
            && self.pool_balance > 0
            && self.entries.count() > 0
    }

    fn try_enter(&mut self, account_id: &AccountId, amount: Balance) -> Result<(), RaffleError> {
        if amount < self.entrance_fee {
            return Err(RaffleError::InsufficientValue {
                attached: amount,
                required: self.entrance_fee,
            });
        }
        if self.pending_settlement.is_some() {
            return Err(RaffleError::SettlementInFlight);
        }
        if self.state != RaffleState::Open {
            return Err(RaffleError::NotOpen);
        }

        self.entries.append(&Entry {
            account_id: account_id.clone(),
            amount: U128(amount),
        });
        self.pool_balance += amount;
        events::raffle_entered(account_id, amount);

        Ok(())
    }

    fn try_start_draw(&mut self) -> Result<RequestId, RaffleError> {
        if !self.is_draw_ready() {
            return Err(RaffleError::UpkeepNotNeeded {
                pool_balance: self.pool_balance,
                entry_count: self.entries.count(),
                state: self.state,
            });
        }

        // Lock the round before anything leaves the contract.
        self.state = RaffleState::Calculating;
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(request_id);
        events::draw_requested(request_id);

        Ok(request_id)
    }

    fn try_fulfill(
        &mut self,
        request_id: RequestId,
        random_words: &[RandomWord],
    ) -> Result<(AccountId, Balance), RaffleError> {
        if self.state != RaffleState::Calculating {
            return Err(RaffleError::NotCalculating);
        }
        let outstanding = self.pending_request.ok_or(RaffleError::NotCalculating)?;
        if outstanding != request_id {
            return Err(RaffleError::UnknownRequest { request_id });
        }
        let word = random_words.first().ok_or(RaffleError::EmptyFulfillment)?;

        let winner_index = winning_index(word, self.entries.count());
        let winner = self.entries.get(winner_index)?;
        let prize = self.pool_balance;

        // Effects: journal the round, then reset it for re-opening. The
        // transfer happens only after every state mutation is done.
        self.pending_settlement = Some(SettlementJournal {
            request_id,
            pool_balance: prize,
            entries: self.entries.to_vec(),
            previous_winner: self.recent_winner.clone(),
            previous_draw_timestamp_ms: self.last_draw_timestamp_ms,
        });
        self.pending_request = None;
        self.recent_winner = Some(winner.account_id.clone());
        self.state = RaffleState::Open;
        self.entries.clear();
        self.pool_balance = 0;
        self.last_draw_timestamp_ms = env::block_timestamp_ms();
        events::winner_selected(&winner.account_id, winner_index, prize);

        Ok((winner.account_id, prize))
    }

    fn finalize_settlement(
        &mut self,
        winner: &AccountId,
        amount: Balance,
        call_result: Result<(), PromiseError>,
    ) {
        let journal = match self.pending_settlement.take() {
            Some(journal) => journal,
            None => env::panic_str("ERR_NO_SETTLEMENT_PENDING"),
        };

        match call_result {
            Ok(()) => events::settlement_complete(winner, amount, journal.request_id),
            Err(_) => {
                // Restore the round exactly as it was before the reset so a
                // later fulfillment can settle it.
                self.state = RaffleState::Calculating;
                self.pending_request = Some(journal.request_id);
                self.pool_balance = journal.pool_balance;
                self.entries.restore(&journal.entries);
                self.recent_winner = journal.previous_winner;
                self.last_draw_timestamp_ms = journal.previous_draw_timestamp_ms;
                events::settlement_failed(winner, amount, journal.request_id);
            }
        }
    }
}
