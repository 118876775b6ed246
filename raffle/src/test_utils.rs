use near_sdk::{AccountId, Balance};

pub fn owner() -> AccountId {
    "owner".parse().unwrap()
}
pub fn oracle() -> AccountId {
    "vrf-oracle".parse().unwrap()
}
pub fn alice() -> AccountId {
    "alice".parse().unwrap()
}
pub fn bob() -> AccountId {
    "bob".parse().unwrap()
}
pub fn charlie() -> AccountId {
    "charlie".parse().unwrap()
}

pub fn ntoy(near_amount: Balance) -> Balance {
    near_amount * 10u128.pow(24)
}

#[cfg(test)]
pub mod tests {
    use near_sdk::json_types::U128;
    use near_sdk::test_utils::VMContextBuilder;
    use near_sdk::{testing_env, VMContext};

    use crate::Contract;

    use super::*;

    pub const FEE: Balance = 100;
    pub const INTERVAL_SECONDS: u64 = 3_600;
    pub const FULFILLMENT_GAS: u64 = 150_000_000_000_000;

    pub struct Emulator {
        pub contract: Contract,
        pub block_timestamp_ns: u64,
        pub context: VMContext,
    }

    impl Emulator {
        pub fn new() -> Self {
            let context = VMContextBuilder::new()
                .current_account_id(owner())
                .account_balance(ntoy(10))
                .build();
            testing_env!(context.clone());
            let contract = Contract::new(
                U128(FEE),
                INTERVAL_SECONDS,
                oracle(),
                "vrf-key".to_string(),
                FULFILLMENT_GAS,
            );
            Emulator {
                contract,
                block_timestamp_ns: 0,
                context,
            }
        }

        pub fn update_context(&mut self, predecessor: AccountId, deposit: Balance) {
            self.context = VMContextBuilder::new()
                .current_account_id(owner())
                .predecessor_account_id(predecessor)
                .attached_deposit(deposit)
                .account_balance(ntoy(10))
                .block_timestamp(self.block_timestamp_ns)
                .build();
            testing_env!(self.context.clone());
        }

        pub fn skip_seconds(&mut self, seconds: u64) {
            self.block_timestamp_ns += seconds * 1_000_000_000;
            self.update_context(owner(), 0);
        }

        pub fn enter_as(&mut self, account: AccountId, deposit: Balance) {
            self.update_context(account, deposit);
            self.contract.enter();
        }

        pub fn as_oracle(&mut self) {
            self.update_context(oracle(), 0);
        }
    }
}
