use crate::types::{FieldElement, PublicKey};

/// Decides whether caller-supplied commitments are valid successors of the stored ones.
///
/// Authorization alone gates the transitions; this hook is where a
/// membership insertion or vote-history chaining check belongs. The `()`
/// implementation accepts every update.
pub trait CommitmentUpdateValidator
{
    /// Called by `register` once the registrant has been authorized.
    fn validate_registration(
        _prior_membership: &FieldElement,
        _proposed_membership: &FieldElement,
        _registrant: &PublicKey
    ) -> bool
    {
        true
    }

    /// Called by `publish_vote` once the relay authority has been authorized.
    fn validate_publication(
        _prior_history: &FieldElement,
        _proposed_history: &FieldElement,
        _prior_membership: &FieldElement,
        _proposed_membership: &FieldElement
    ) -> bool
    {
        true
    }
}

impl CommitmentUpdateValidator for () {}
