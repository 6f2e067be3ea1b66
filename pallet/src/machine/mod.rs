//! Pure state transitions.
//!
//! Each transition maps `(prior state, public arguments, witness)` to a
//! candidate state or an error. Nothing here touches storage; a caller
//! persists the candidate only when the transition returns `Ok`.

pub mod publication;
pub mod registration;
pub mod validator;

pub use publication::publish_vote;
pub use registration::{init, register};
pub use validator::CommitmentUpdateValidator;

use ark_bn254::{Fq, Fr};
use crate::circuit::Bit;
use crate::types::{FieldElement, PrivateKeyWitness};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionError
{
    /// An argument is not a canonical field encoding.
    MalformedInput,
    /// The derived identity matches none of the required references.
    AuthorizationFailure,
    /// The configured validator refused the proposed commitments.
    CommitmentUpdateRejected,
    /// `init` was called on an initialized store under `InitPolicy::OneShot`.
    AlreadyInitialized
}

/// Asserts a predicate bit, aborting the transition when it is unset.
pub fn enforce(bit: Bit<Fq>) -> Result<(), TransitionError>
{
    if bit.is_set() { Ok(()) } else { Err(TransitionError::AuthorizationFailure) }
}

fn decode_witness(witness: &PrivateKeyWitness) -> Result<Fr, TransitionError>
{
    witness.scalar().ok_or(TransitionError::MalformedInput)
}

fn ensure_canonical(elements: &[&FieldElement]) -> Result<(), TransitionError>
{
    if elements.iter().all(|element| element.is_canonical()) { Ok(()) }
    else { Err(TransitionError::MalformedInput) }
}
