use crate::interfaces::raffle::RaffleState;
use common::types::RequestId;
use near_sdk::{AccountId, Balance};
use std::fmt;

/// Tagged failure reasons carrying the diagnostic payload callers branch on.
#[derive(Debug, PartialEq)]
pub enum RaffleError {
    /// Attached deposit is below the entrance fee.
    InsufficientValue { attached: Balance, required: Balance },
    /// The round is not accepting entries.
    NotOpen,
    /// The previous round's payout has not resolved yet.
    SettlementInFlight,
    /// The readiness predicate is false; carries the values it saw.
    UpkeepNotNeeded {
        pool_balance: Balance,
        entry_count: u64,
        state: RaffleState,
    },
    /// No randomness request is outstanding.
    NotCalculating,
    /// Fulfillment for an id that is not the outstanding request.
    UnknownRequest { request_id: RequestId },
    /// The oracle delivered no random words.
    EmptyFulfillment,
    /// Fulfillment attempted by an account other than the oracle.
    OracleOnly { expected: AccountId },
    /// Ledger lookup past the end of the active round.
    IndexOutOfRange { index: u64, len: u64 },
}

impl fmt::Display for RaffleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaffleError::InsufficientValue { attached, required } => write!(
                f,
                "ERR_INSUFFICIENT_VALUE: attached {} is below the entrance fee {}",
                attached, required
            ),
            RaffleError::NotOpen => {
                write!(f, "ERR_NOT_OPEN: the raffle is not accepting entries")
            }
            RaffleError::SettlementInFlight => write!(
                f,
                "ERR_SETTLEMENT_IN_FLIGHT: the previous round's payout has not resolved"
            ),
            RaffleError::UpkeepNotNeeded {
                pool_balance,
                entry_count,
                state,
            } => write!(
                f,
                "ERR_UPKEEP_NOT_NEEDED: pool balance {}, entry count {}, state {:?}",
                pool_balance, entry_count, state
            ),
            RaffleError::NotCalculating => {
                write!(f, "ERR_NOT_CALCULATING: no draw is awaiting randomness")
            }
            RaffleError::UnknownRequest { request_id } => write!(
                f,
                "ERR_UNKNOWN_REQUEST: request id {} is not outstanding",
                request_id
            ),
            RaffleError::EmptyFulfillment => {
                write!(f, "ERR_EMPTY_FULFILLMENT: the oracle delivered no random words")
            }
            RaffleError::OracleOnly { expected } => {
                write!(f, "ERR_ORACLE_ONLY: only {} may fulfill randomness", expected)
            }
            RaffleError::IndexOutOfRange { index, len } => write!(
                f,
                "ERR_INDEX_OUT_OF_RANGE: index {} for a ledger of length {}",
                index, len
            ),
        }
    }
}
