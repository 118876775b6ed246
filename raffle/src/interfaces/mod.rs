pub mod raffle {
    use common::types::{RandomWord, RequestId};
    use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
    use near_sdk::json_types::U128;
    use near_sdk::serde::{Deserialize, Serialize};
    use near_sdk::{AccountId, Promise};

    /// Lifecycle of the active round. Entries are accepted only while
    /// `Open`; `Calculating` covers the window between the randomness
    /// request and its fulfillment.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[derive(BorshDeserialize, BorshSerialize)]
    #[derive(Serialize, Deserialize)]
    #[serde(crate = "near_sdk::serde")]
    pub enum RaffleState {
        Open,
        Calculating,
    }

    /// One registration: the participant plus the deposit they attached.
    #[derive(Clone, Debug, PartialEq)]
    #[derive(BorshDeserialize, BorshSerialize)]
    #[derive(Serialize, Deserialize)]
    #[serde(crate = "near_sdk::serde")]
    pub struct Entry {
        pub account_id: AccountId,
        pub amount: U128,
    }

    /// Surface the external upkeep caller polls and triggers.
    pub trait UpkeepTarget {
        fn check_upkeep(&self, check_data: Option<String>) -> (bool, Option<String>);
        fn perform_upkeep(&mut self, perform_data: Option<String>);
    }

    /// Surface the randomness oracle calls back into.
    pub trait RandomnessConsumer {
        fn fulfill_randomness(
            &mut self,
            request_id: RequestId,
            random_words: Vec<RandomWord>,
        ) -> Promise;
    }
}
