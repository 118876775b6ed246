use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use uint::construct_uint;

/// Identifier of one outstanding randomness request. Allocated by the
/// raffle contract and echoed back by the oracle in the fulfillment call.
pub type RequestId = u64;

construct_uint! {
    /// 256-bit unsigned integer
    #[derive(Serialize, Deserialize, BorshDeserialize, BorshSerialize)]
    pub struct U256(4);
}

/// One verifiable random value as delivered by the oracle.
pub type RandomWord = U256;
