pub mod types;

pub mod selection {
    use crate::types::RandomWord;

    /// Maps one random word onto an entry index as `word mod count`.
    /// The modulo bias for counts that do not divide the word's range is
    /// negligible and accepted.
    pub fn winning_index(word: &RandomWord, count: u64) -> u64 {
        assert!(count > 0, "cannot select a winner from an empty ledger");
        (*word % RandomWord::from(count)).as_u64()
    }
}
