pub mod gadgets;
pub mod identity;

pub use gadgets::{Bit, first_match};
pub use identity::{
    authorize,
    derive_identity,
    is_valid_identity,
    Authorization,
    IdentityVar
};

use crate::types::{PrivateKeyWitness, PublicKey};

impl PrivateKeyWitness
{
    /// The public identity of this witness, if it encodes a valid scalar.
    pub fn identity(&self) -> Option<PublicKey>
    {
        self.scalar().map(|secret| derive_identity(&secret).into())
    }
}
