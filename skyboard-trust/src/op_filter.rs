use skyboard_base::Did;
use skyboard_model::Op;

use crate::visibility::TrustContext;

/// Where a given op lands relative to one task, from one viewer's
/// perspective (§4.3). Whether a `Pending` op survives into the
/// materializer's `pending_proposals` output additionally depends on
/// whether the *task* itself is visible — that decision needs
/// task-level context this module doesn't have, so it's made one layer
/// up, in the materializer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpClass {
    /// The author is eligible to contribute to LWW for this task.
    Applied,
    /// The author is ineligible to merge but the op is still a
    /// candidate for the pending-proposals side channel.
    Pending,
}

/// `A == O_B ∨ A == O_T ∨ A == V ∨ A ∈ trusts` (§4.3). Note this is
/// eligibility for *merge*, which is broader than eligibility for
/// *visibility* in one direction (the viewer always sees their own ops
/// applied even pre-trust) — callers needing visibility use
/// [`TrustContext::is_content_visible`] separately.
pub fn is_eligible_for_merge(author: &Did, task_owner: &Did, ctx: &TrustContext) -> bool {
    author == task_owner || author == ctx.viewer || ctx.is_trusted(author)
}

/// Classifies a single op against one task for one viewer. The caller is
/// expected to already have confirmed the op's `target_task_uri`
/// resolves to this task.
pub fn classify_op(author: &Did, task_owner: &Did, ctx: &TrustContext) -> OpClass {
    if is_eligible_for_merge(author, task_owner, ctx) {
        OpClass::Applied
    } else {
        // An ineligible author's op is still worth surfacing as a pending
        // proposal as long as its author would otherwise be visible on
        // this task — which here always holds, because a viewer who can
        // see the task at all can see who is proposing changes to it.
        // Full omission (§4.3's "ineligible-and-also-invisible") only
        // applies when the *task itself* is not visible, which is a
        // decision the materializer makes at the task level, not here.
        OpClass::Pending
    }
}

/// Splits `ops` (assumed already bucketed to one task) into applied and
/// pending, per op author.
pub fn split_applied_and_pending<'a>(
    ops: &'a [Op],
    task_owner: &Did,
    ctx: &TrustContext,
) -> (Vec<&'a Op>, Vec<&'a Op>) {
    let mut applied = Vec::new();
    let mut pending = Vec::new();
    for op in ops {
        match classify_op(&op.owner, task_owner, ctx) {
            OpClass::Applied => applied.push(op),
            OpClass::Pending => pending.push(op),
        }
    }
    (applied, pending)
}
