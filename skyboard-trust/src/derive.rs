use std::collections::BTreeSet;

use skyboard_base::Did;
use skyboard_model::Trust;

/// Reduces raw `Trust` records into the `owner_trusts` set a
/// [`crate::TrustContext`] consumes (§3): "Trust records from parties
/// other than the board owner are ignored by the core," so only records
/// where `trust.owner == board_owner` contribute a trusted party.
pub fn derive_owner_trusts(trusts: &[Trust], board_owner: &Did) -> BTreeSet<Did> {
    trusts
        .iter()
        .filter(|trust| &trust.owner == board_owner)
        .map(|trust| trust.trusted_party.clone())
        .collect()
}
