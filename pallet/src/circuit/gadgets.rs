//! Arithmetic gadgets over a prime field.
//!
//! Every gadget computes its result from field operations alone, so a
//! transition evaluates the same sequence of operations whatever the
//! witness is. Booleans are field elements constrained to {0, 1}.

use ark_ff::Field;

/// A field element known to be either zero or one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bit<F: Field>(F);

impl<F: Field> Bit<F>
{
    pub fn constant(value: bool) -> Self
    {
        if value { Bit(F::one()) } else { Bit(F::zero()) }
    }

    pub fn value(&self) -> F
    {
        self.0
    }

    /// Reads the bit out of the field. Only the assertion boundary should need this.
    pub fn is_set(&self) -> bool
    {
        self.0 == F::one()
    }

    pub fn and(self, other: Self) -> Self
    {
        Bit(self.0 * other.0)
    }

    pub fn or(self, other: Self) -> Self
    {
        Bit(self.0 + other.0 - self.0 * other.0)
    }

    pub fn not(self) -> Self
    {
        Bit(F::one() - self.0)
    }
}

/// `1` iff `value == 0`, computed as `1 - value * value^-1` with `0^-1 := 0`.
pub fn is_zero<F: Field>(value: F) -> Bit<F>
{
    let inverse = value.inverse().unwrap_or_else(F::zero);
    Bit(F::one() - value * inverse)
}

pub fn is_equal<F: Field>(a: F, b: F) -> Bit<F>
{
    is_zero(a - b)
}

/// Returns `cond ? a : b` as `b + cond * (a - b)`.
pub fn select<F: Field>(a: F, b: F, cond: Bit<F>) -> F
{
    b + cond.0 * (a - b)
}

/// OR over every bit; all of them are folded in.
pub fn any<F: Field, const N: usize>(bits: &[Bit<F>; N]) -> Bit<F>
{
    bits.iter().fold(Bit::constant(false), |acc, bit| acc.or(*bit))
}

/// Keeps only the lowest set bit, producing a one-hot (or all-zero) vector.
pub fn first_match<F: Field, const N: usize>(bits: &[Bit<F>; N]) -> [Bit<F>; N]
{
    let mut seen = Bit::constant(false);
    (*bits).map(|bit| {
        let hit = bit.and(seen.not());
        seen = seen.or(bit);
        hit
    })
}
