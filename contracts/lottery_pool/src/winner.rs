use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::error::Error;
use crate::storage::Store;

pub struct Selector;

impl Selector {
    /// Pick the round's winner, weighted by entry count.
    ///
    /// One pseudo-random entry index is drawn from the ledger's entropy and
    /// reduced modulo `total_entries`; the contributions are then walked in
    /// insertion order accumulating entry counts until the cumulative range
    /// covering the index is found. Ranges are disjoint by construction, so
    /// ties are impossible. A contributor with several contributions simply
    /// owns several ranges.
    ///
    /// Returns the winner and the drawn index.
    pub fn select(env: &Env, round_id: u64, total_entries: i128) -> Result<(Address, i128), Error> {
        if total_entries <= 0 {
            return Err(Error::NoEligibleEntries);
        }

        let target = Self::draw_entry_index(env, total_entries);

        let mut cumulative: i128 = 0;
        for contribution in Store::contributions(env, round_id).iter() {
            cumulative = cumulative
                .checked_add(contribution.entry_count)
                .ok_or(Error::Overflow)?;
            if target < cumulative {
                return Ok((contribution.contributor, target));
            }
        }

        // Unreachable while round totals match the contribution sequence.
        Err(Error::NoEligibleEntries)
    }

    /// Ledger timestamp, ledger sequence and a host PRNG draw, folded
    /// through sha256 and reduced modulo `total_entries`.
    ///
    /// This entropy is observable by whoever orders transactions; do not
    /// treat a draw as unpredictable to a block producer.
    fn draw_entry_index(env: &Env, total_entries: i128) -> i128 {
        let mut seed = Bytes::new(env);
        seed.extend_from_array(&env.ledger().timestamp().to_be_bytes());
        seed.extend_from_array(&env.ledger().sequence().to_be_bytes());
        seed.extend_from_array(&env.prng().gen::<u64>().to_be_bytes());

        let digest: BytesN<32> = env.crypto().sha256(&seed).into();
        let bytes = digest.to_array();

        let mut acc: u128 = 0;
        for byte in bytes.iter().take(16) {
            acc = (acc << 8) | *byte as u128;
        }
        (acc % total_entries as u128) as i128
    }
}
