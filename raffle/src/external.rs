use crate::*;

// Callback
#[ext_contract(this_contract)]
pub trait ExtSelf {
    fn on_settlement_transfer(
        &mut self,
        winner: AccountId,
        amount: U128,
        #[callback_result] call_result: Result<(), PromiseError>,
    );
}

#[ext_contract(ext_vrf)]
pub trait ExtVrfOracle {
    /// Fire-and-forget randomness request; the oracle is expected to call
    /// `fulfill_randomness` on this contract exactly once per request.
    fn request_random_words(
        &mut self,
        request_id: RequestId,
        key: String,
        num_words: u32,
        callback_gas: u64,
    );
}
