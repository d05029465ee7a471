use std::collections::BTreeSet;

use skyboard_base::Did;
use skyboard_model::RecordUri;

/// The trust/visibility inputs derived once per materialization (§4.2):
/// the board owner, the current viewer, and the set of parties the owner
/// has explicitly trusted. Borrowed for the lifetime of one run — this
/// struct owns nothing and outlives no materialization call.
pub struct TrustContext<'a> {
    pub board_owner: &'a Did,
    pub viewer: &'a Did,
    pub owner_trusts: &'a BTreeSet<Did>,
}

impl<'a> TrustContext<'a> {
    pub fn new(board_owner: &'a Did, viewer: &'a Did, owner_trusts: &'a BTreeSet<Did>) -> Self {
        TrustContext {
            board_owner,
            viewer,
            owner_trusts,
        }
    }

    /// `is_trusted(party) = party == board_owner || party ∈ owner_trusts`.
    /// Trust is board-owner-asserted; the viewer cannot widen or narrow it.
    pub fn is_trusted(&self, party: &Did) -> bool {
        party == self.board_owner || self.owner_trusts.contains(party)
    }

    /// `is_content_visible(author, viewer, target_uri)` from §4.2. Never
    /// fails: returns `false` on any input that doesn't satisfy one of the
    /// four visibility conditions.
    pub fn is_content_visible(
        &self,
        author: &Did,
        target_uri: &RecordUri,
        board_open: bool,
        approved_uris: &BTreeSet<RecordUri>,
    ) -> bool {
        author == self.viewer
            || self.is_trusted(author)
            || (board_open && approved_uris.contains(target_uri))
    }
}
