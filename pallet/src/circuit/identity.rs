use ark_bn254::{Fq, Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, Group};

use crate::circuit::gadgets::{any, is_equal, select, Bit};
use crate::types::{decode_field, encode_field, PublicKey};

/// An identity as a pair of base field coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentityVar
{
    pub x: Fq,
    pub y: Fq
}

impl IdentityVar
{
    pub fn empty() -> Self
    {
        IdentityVar { x: Fq::from(0u64), y: Fq::from(0u64) }
    }

    /// Structural equality over both coordinates.
    pub fn is_equal(&self, other: &Self) -> Bit<Fq>
    {
        is_equal(self.x, other.x).and(is_equal(self.y, other.y))
    }

    /// Coordinate-wise `cond ? a : b`.
    pub fn select(a: &Self, b: &Self, cond: Bit<Fq>) -> Self
    {
        IdentityVar {
            x: select(a.x, b.x, cond),
            y: select(a.y, b.y, cond)
        }
    }
}

impl IdentityVar
{
    /// Decodes both coordinates, rejecting any that are not canonical.
    pub fn decode(key: &PublicKey) -> Option<Self>
    {
        Some(IdentityVar {
            x: decode_field(&key.x)?,
            y: decode_field(&key.y)?
        })
    }

    pub fn is_on_curve(&self) -> bool
    {
        G1Affine::new_unchecked(self.x, self.y).is_on_curve()
    }
}

/// True for the empty sentinel and for canonical encodings of a G1 point.
pub fn is_valid_identity(key: &PublicKey) -> bool
{
    key.is_empty() || IdentityVar::decode(key).map_or(false, |var| var.is_on_curve())
}

impl From<IdentityVar> for PublicKey
{
    fn from(var: IdentityVar) -> Self
    {
        PublicKey { x: encode_field(&var.x), y: encode_field(&var.y) }
    }
}

/// Derives the public identity `[sk]G` of a private scalar.
///
/// The zero scalar yields the point at infinity, whose affine encoding
/// coincides with the empty sentinel.
pub fn derive_identity(secret: &Fr) -> IdentityVar
{
    let point = (G1Projective::generator() * *secret).into_affine();
    IdentityVar { x: point.x, y: point.y }
}

/// Result of comparing a derived identity against a set of references.
#[derive(Clone, Copy, Debug)]
pub struct Authorization<const N: usize>
{
    /// The identity derived from the witness.
    pub identity: IdentityVar,

    /// One bit per reference, set where the reference equals `identity`.
    pub matches: [Bit<Fq>; N],

    /// OR of `matches`, and false whenever `identity` is the empty sentinel.
    pub permitted: Bit<Fq>
}

/// Evaluates the authorization predicate against every reference.
///
/// A reference that does not decode canonically never matches.
pub fn authorize<const N: usize>(secret: &Fr, references: &[PublicKey; N]) -> Authorization<N>
{
    let identity = derive_identity(secret);
    let live = identity.is_equal(&IdentityVar::empty()).not();

    let matches = (*references).map(|reference| {
        IdentityVar::decode(&reference)
            .map_or(Bit::constant(false), |var| identity.is_equal(&var).and(live))
    });

    Authorization {
        identity,
        matches,
        permitted: any(&matches)
    }
}
