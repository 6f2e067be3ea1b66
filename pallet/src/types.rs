use core::fmt;
use frame_support::pallet_prelude::*;
use ark_ff::{BigInteger, PrimeField};

pub const ENCODED_LEN: usize = 32;

pub type EncodedBytes = [u8; ENCODED_LEN];

/// Encode a prime field element as 32 big-endian bytes.
pub fn encode_field<F: PrimeField>(element: &F) -> EncodedBytes
{
    let bytes = element.into_bigint().to_bytes_be();
    let mut out = [0u8; ENCODED_LEN];
    let offset = ENCODED_LEN.saturating_sub(bytes.len());
    out[offset..].copy_from_slice(&bytes[bytes.len().saturating_sub(ENCODED_LEN)..]);
    out
}

/// Decode 32 big-endian bytes, rejecting values at or above the modulus.
pub fn decode_field<F: PrimeField>(bytes: &EncodedBytes) -> Option<F>
{
    let element = F::from_be_bytes_mod_order(bytes);
    (encode_field(&element) == *bytes).then_some(element)
}

/// A BN254 scalar field element, used to carry commitments.
#[derive(Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct FieldElement(pub EncodedBytes);

impl FieldElement
{
    pub const ZERO: FieldElement = FieldElement([0u8; ENCODED_LEN]);

    pub fn is_canonical(&self) -> bool
    {
        decode_field::<ark_bn254::Fr>(&self.0).is_some()
    }
}

impl From<u64> for FieldElement
{
    fn from(value: u64) -> Self
    {
        FieldElement(encode_field(&ark_bn254::Fr::from(value)))
    }
}

/// A public identity: the affine coordinates of `[sk]G` on BN254 G1.
#[derive(Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct PublicKey
{
    /// A 256-bit x-coordinate of the public key.
    pub x: EncodedBytes,

    /// A 256-bit y-coordinate of the public key.
    pub y: EncodedBytes
}

impl PublicKey
{
    /// The sentinel of an invalidated voter slot. `(0, 0)` is not a curve point.
    pub const EMPTY: PublicKey = PublicKey { x: [0u8; ENCODED_LEN], y: [0u8; ENCODED_LEN] };

    pub fn is_empty(&self) -> bool
    {
        *self == Self::EMPTY
    }
}

/// A private key supplied at call time. Never persisted.
#[derive(Clone, Encode, Decode, Eq, PartialEq, TypeInfo)]
pub struct PrivateKeyWitness(pub EncodedBytes);

impl PrivateKeyWitness
{
    pub fn from_scalar(scalar: &ark_bn254::Fr) -> Self
    {
        PrivateKeyWitness(encode_field(scalar))
    }

    pub fn scalar(&self) -> Option<ark_bn254::Fr>
    {
        decode_field(&self.0)
    }
}

impl fmt::Debug for PrivateKeyWitness
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("PrivateKeyWitness(<redacted>)")
    }
}

/// Identities provisioned at deployment and consumed by `init`.
#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct IdentityTable
{
    /// Placed in the first voter slot.
    pub first_voter: PublicKey,

    /// Placed in the second voter slot.
    pub second_voter: PublicKey,

    /// The only identity permitted to publish votes.
    pub relay_authority: PublicKey
}

/// Whether `init` may run against an already initialized store.
#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub enum InitPolicy
{
    /// `init` always overwrites every field, including the relay authority.
    Repeatable,

    /// `init` is rejected once the store has been initialized.
    OneShot
}

/// The complete on-chain state, as seen by a single method evaluation.
#[derive(Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct ContractState
{
    /// Digest of the accumulated vote results.
    pub vote_history_commitment: FieldElement,

    /// Digest of the set of registered identities.
    pub membership_commitment: FieldElement,

    /// First pre-provisioned voter, or `PublicKey::EMPTY` once registered.
    pub voter_slot_one: PublicKey,

    /// Second pre-provisioned voter, or `PublicKey::EMPTY` once registered.
    pub voter_slot_two: PublicKey,

    /// Fixed at initialization.
    pub relay_authority: PublicKey
}

impl ContractState
{
    pub fn voter_slots(&self) -> [PublicKey; 2]
    {
        [self.voter_slot_one, self.voter_slot_two]
    }

    pub fn with_voter_slots(self, slots: [PublicKey; 2]) -> Self
    {
        let [voter_slot_one, voter_slot_two] = slots;
        ContractState { voter_slot_one, voter_slot_two, ..self }
    }
}
