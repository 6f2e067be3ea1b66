use crate::circuit::authorize;
use crate::machine::{
    decode_witness,
    enforce,
    ensure_canonical,
    CommitmentUpdateValidator,
    TransitionError
};
use crate::types::{ContractState, FieldElement, PrivateKeyWitness};

/// Publishes new vote-history and membership commitments on behalf of the relay authority.
pub fn publish_vote<V: CommitmentUpdateValidator>(
    prior: &ContractState,
    vote_history_commitment: FieldElement,
    membership_commitment: FieldElement,
    witness: &PrivateKeyWitness
) -> Result<ContractState, TransitionError>
{
    ensure_canonical(&[&vote_history_commitment, &membership_commitment])?;
    let secret = decode_witness(witness)?;

    let authorization = authorize(&secret, &[prior.relay_authority]);
    enforce(authorization.permitted)?;

    if !V::validate_publication(
        &prior.vote_history_commitment,
        &vote_history_commitment,
        &prior.membership_commitment,
        &membership_commitment
    )
    {
        return Err(TransitionError::CommitmentUpdateRejected);
    }

    Ok(ContractState {
        vote_history_commitment,
        membership_commitment,
        ..*prior
    })
}
