use crate::circuit::{authorize, first_match, is_valid_identity, IdentityVar};
use crate::machine::{
    decode_witness,
    enforce,
    ensure_canonical,
    CommitmentUpdateValidator,
    TransitionError
};
use crate::types::{
    ContractState,
    FieldElement,
    IdentityTable,
    InitPolicy,
    PrivateKeyWitness,
    PublicKey
};

/// Produces the initial state from the deployment identities.
///
/// `prior` is `None` when the store has never been initialized. Under
/// `InitPolicy::Repeatable` the prior state is ignored entirely, so any
/// caller may reset the commitments and the relay authority.
///
/// Every identity must be the empty sentinel or a canonically encoded
/// G1 point.
pub fn init(
    prior: Option<&ContractState>,
    identities: &IdentityTable,
    policy: InitPolicy
) -> Result<ContractState, TransitionError>
{
    if policy == InitPolicy::OneShot && prior.is_some()
    {
        return Err(TransitionError::AlreadyInitialized);
    }

    let provisioned = [identities.first_voter, identities.second_voter, identities.relay_authority];
    if !provisioned.iter().all(is_valid_identity)
    {
        return Err(TransitionError::MalformedInput);
    }

    Ok(ContractState {
        vote_history_commitment: FieldElement::ZERO,
        membership_commitment: FieldElement::ZERO,
        voter_slot_one: identities.first_voter,
        voter_slot_two: identities.second_voter,
        relay_authority: identities.relay_authority
    })
}

/// Registers the holder of `witness` if they occupy a voter slot.
///
/// The matching slot is replaced with the empty sentinel so the same
/// identity can never register twice. When both slots hold the same
/// identity only the first is invalidated.
pub fn register<V: CommitmentUpdateValidator>(
    prior: &ContractState,
    membership_commitment: FieldElement,
    witness: &PrivateKeyWitness
) -> Result<ContractState, TransitionError>
{
    ensure_canonical(&[&membership_commitment])?;
    let secret = decode_witness(witness)?;

    let slots = prior.voter_slots();
    let authorization = authorize(&secret, &slots);
    enforce(authorization.permitted)?;

    let registrant: PublicKey = authorization.identity.into();
    if !V::validate_registration(&prior.membership_commitment, &membership_commitment, &registrant)
    {
        return Err(TransitionError::CommitmentUpdateRejected);
    }

    // Every decodable slot is rewritten through the multiplexer; only the hit changes.
    // A slot that does not decode never matches and keeps its bytes.
    let empty = IdentityVar::empty();
    let targets = first_match(&authorization.matches);
    let mut next_slots = slots;
    for (slot, target) in next_slots.iter_mut().zip(targets.iter())
    {
        if let Some(var) = IdentityVar::decode(slot)
        {
            *slot = IdentityVar::select(&empty, &var, *target).into();
        }
    }

    Ok(ContractState {
        membership_commitment,
        ..prior.with_voter_slots(next_slots)
    })
}
