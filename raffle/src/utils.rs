pub mod storage_keys {
    use near_sdk::borsh::{self, BorshSerialize};
    use near_sdk::BorshStorageKey;

    #[derive(BorshStorageKey, BorshSerialize)]
    pub enum StorageKeys {
        Entries,
    }
}

pub mod gas {
    use near_sdk::Gas;

    pub const REQUEST_RANDOM_WORDS: Gas = Gas(15_000_000_000_000);
    pub const ON_SETTLEMENT_TRANSFER: Gas = Gas(20_000_000_000_000);
}
