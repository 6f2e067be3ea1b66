#![cfg_attr(not(feature = "std"), no_std)]

//! Authorization-gated voter registration and vote publication.
//!
//! The pallet keeps five fields: a vote-history commitment, a membership
//! commitment, two one-time voter slots and a relay authority. Callers
//! prove who they are with a private key witness; every method evaluates
//! a pure transition (see [`machine`]) and persists the candidate state
//! only when the whole transition succeeds.

pub use pallet::*;

pub mod circuit;
pub mod machine;
pub mod store;
pub mod types;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
pub mod benchmarking;

pub const LOG_TARGET: &str = "runtime::relay-voting";

#[frame_support::pallet]
pub mod pallet
{
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;
	use sp_runtime::traits::Hash as HashT;
	use crate::machine::{self, CommitmentUpdateValidator, TransitionError};
	use crate::store::StateStore;
	use crate::types::{
		ContractState,
		FieldElement,
		IdentityTable,
		InitPolicy,
		PrivateKeyWitness,
		PublicKey
	};

	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config
	{
		/// The overarching event type.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// The identities written by `init`.
		type Deployment: Get<IdentityTable>;

		/// Whether `init` may overwrite an initialized store.
		#[pallet::constant]
		type InitializationPolicy: Get<InitPolicy>;

		/// Checks caller-supplied commitments after authorization. Use `()` to accept all.
		type Validator: CommitmentUpdateValidator;
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config>
	{
		/// The store was (re)initialized.
		Initialized {
			/// The relay authority now in effect.
			relay_authority: PublicKey,
			/// The resulting state commitment.
			state: T::Hash
		},

		/// A voter registered and their slot was invalidated.
		VoterRegistered {
			/// The new membership commitment.
			membership_commitment: FieldElement,
			/// The resulting state commitment.
			state: T::Hash
		},

		/// The relay authority published new commitments.
		VotePublished {
			/// The new vote-history commitment.
			vote_history_commitment: FieldElement,
			/// The new membership commitment.
			membership_commitment: FieldElement,
			/// The resulting state commitment.
			state: T::Hash
		}
	}

	#[pallet::error]
	pub enum Error<T>
	{
		/// A commitment or witness is not a canonical field encoding.
		MalformedInput,

		/// The witness does not derive any identity permitted to make this call.
		AuthorizationFailure,

		/// The commitment update validator rejected the proposed commitments.
		CommitmentUpdateRejected,

		/// The store is already initialized and the policy forbids re-initialization.
		AlreadyInitialized
	}

	impl<T> From<TransitionError> for Error<T>
	{
		fn from(error: TransitionError) -> Self
		{
			match error
			{
				TransitionError::MalformedInput => Error::<T>::MalformedInput,
				TransitionError::AuthorizationFailure => Error::<T>::AuthorizationFailure,
				TransitionError::CommitmentUpdateRejected => Error::<T>::CommitmentUpdateRejected,
				TransitionError::AlreadyInitialized => Error::<T>::AlreadyInitialized
			}
		}
	}

	/// Digest of the accumulated vote results.
	#[pallet::storage]
	#[pallet::getter(fn vote_history_commitment)]
	pub type VoteHistoryCommitment<T: Config> = StorageValue<_, FieldElement, ValueQuery>;

	/// Digest of the set of registered identities.
	#[pallet::storage]
	#[pallet::getter(fn membership_commitment)]
	pub type MembershipCommitment<T: Config> = StorageValue<_, FieldElement, ValueQuery>;

	/// The first voter slot; empty once that voter has registered.
	#[pallet::storage]
	#[pallet::getter(fn voter_slot_one)]
	pub type VoterSlotOne<T: Config> = StorageValue<_, PublicKey, ValueQuery>;

	/// The second voter slot; empty once that voter has registered.
	#[pallet::storage]
	#[pallet::getter(fn voter_slot_two)]
	pub type VoterSlotTwo<T: Config> = StorageValue<_, PublicKey, ValueQuery>;

	/// The identity permitted to publish votes. Present iff the store is initialized.
	#[pallet::storage]
	#[pallet::getter(fn relay_authority)]
	pub type RelayAuthority<T: Config> = StorageValue<_, PublicKey, ValueQuery>;

	#[pallet::call]
	impl<T: Config> Pallet<T>
	{
		/// Write the deployment identities and zero both commitments.
		///
		/// Under `InitPolicy::Repeatable` this may be called at any time by
		/// anyone and resets every field, including the relay authority.
		///
		/// Emits `Initialized`.
		#[pallet::call_index(0)]
		#[pallet::weight(T::DbWeight::get().reads_writes(7, 5))]
		pub fn init(
			origin: OriginFor<T>
		) -> DispatchResult
		{
			ensure_signed(origin)?;

			let prior = Self::is_initialized().then(Self::load);
			let next = machine::init(
				prior.as_ref(),
				&T::Deployment::get(),
				T::InitializationPolicy::get()
			).map_err(|error| Self::rejected("init", error))?;

			Self::apply("init", &prior.unwrap_or_default(), &next);

			Self::deposit_event(Event::Initialized {
				relay_authority: next.relay_authority,
				state: T::Hashing::hash_of(&next)
			});

			Ok(())
		}

		/// Register the holder of `signer_witness`, who must occupy a voter slot.
		///
		/// - `membership_commitment`: The new membership commitment.
		/// - `signer_witness`: The private key of the registering voter.
		///
		/// Emits `VoterRegistered`.
		#[pallet::call_index(1)]
		#[pallet::weight(T::DbWeight::get().reads_writes(6, 2))]
		pub fn register(
			origin: OriginFor<T>,
			membership_commitment: FieldElement,
			signer_witness: PrivateKeyWitness
		) -> DispatchResult
		{
			ensure_signed(origin)?;

			let prior = Self::load();
			let next = machine::register::<T::Validator>(
				&prior,
				membership_commitment,
				&signer_witness
			).map_err(|error| Self::rejected("register", error))?;

			Self::apply("register", &prior, &next);

			Self::deposit_event(Event::VoterRegistered {
				membership_commitment: next.membership_commitment,
				state: T::Hashing::hash_of(&next)
			});

			Ok(())
		}

		/// Publish new commitments on behalf of the relay authority.
		///
		/// - `vote_history_commitment`: The new vote-history commitment.
		/// - `membership_commitment`: The new membership commitment.
		/// - `signer_witness`: The private key of the relay authority.
		///
		/// Emits `VotePublished`.
		#[pallet::call_index(2)]
		#[pallet::weight(T::DbWeight::get().reads_writes(6, 2))]
		pub fn publish_vote(
			origin: OriginFor<T>,
			vote_history_commitment: FieldElement,
			membership_commitment: FieldElement,
			signer_witness: PrivateKeyWitness
		) -> DispatchResult
		{
			ensure_signed(origin)?;

			let prior = Self::load();
			let next = machine::publish_vote::<T::Validator>(
				&prior,
				vote_history_commitment,
				membership_commitment,
				&signer_witness
			).map_err(|error| Self::rejected("publish_vote", error))?;

			Self::apply("publish_vote", &prior, &next);

			Self::deposit_event(Event::VotePublished {
				vote_history_commitment: next.vote_history_commitment,
				membership_commitment: next.membership_commitment,
				state: T::Hashing::hash_of(&next)
			});

			Ok(())
		}
	}

	impl<T: Config> Pallet<T>
	{
		/// The commitment to the full contract state that transition proofs are checked against.
		pub fn state_commitment() -> T::Hash
		{
			T::Hashing::hash_of(&Self::load())
		}

		/// Snapshot of the contract state.
		pub fn contract_state() -> ContractState
		{
			Self::load()
		}

		fn apply(method: &str, prior: &ContractState, next: &ContractState)
		{
			let writes = Self::commit(prior, next);
			log::debug!(target: LOG_TARGET, "{} committed {} field write(s)", method, writes);
		}

		fn rejected(method: &str, error: TransitionError) -> Error<T>
		{
			log::debug!(target: LOG_TARGET, "{} rejected: {:?}", method, error);
			error.into()
		}
	}
}
