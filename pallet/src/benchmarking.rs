use super::*;
use ark_bn254::Fr;
use frame_benchmarking::{benchmarks, whitelisted_caller};
use frame_system::RawOrigin;

use crate::store::StateStore;
use crate::types::{FieldElement, PrivateKeyWitness, PublicKey};
use crate::Pallet as RelayVoting;

fn voter() -> PrivateKeyWitness
{
	PrivateKeyWitness::from_scalar(&Fr::from(0x5eedu64))
}

fn identity(witness: &PrivateKeyWitness) -> PublicKey
{
	witness.identity().unwrap_or(PublicKey::EMPTY)
}

benchmarks!
{
	init {
		let caller: T::AccountId = whitelisted_caller();
	}: _(RawOrigin::Signed(caller))
	verify {
		assert!(RelayVoting::<T>::is_initialized());
	}

	register {
		let caller: T::AccountId = whitelisted_caller();
		let witness = voter();
		// The second slot is checked too, so place the voter there.
		VoterSlotTwo::<T>::put(identity(&witness));
	}: _(RawOrigin::Signed(caller), FieldElement::from(7), witness)
	verify {
		assert_eq!(VoterSlotTwo::<T>::get(), PublicKey::EMPTY);
	}

	publish_vote {
		let caller: T::AccountId = whitelisted_caller();
		let witness = voter();
		RelayAuthority::<T>::put(identity(&witness));
	}: _(RawOrigin::Signed(caller), FieldElement::from(5), FieldElement::from(2), witness)
	verify {
		assert_eq!(VoteHistoryCommitment::<T>::get(), FieldElement::from(5));
	}

	impl_benchmark_test_suite!(RelayVoting, crate::mock::new_test_ext(), crate::mock::Test);
}
