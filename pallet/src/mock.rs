use crate as pallet_relay_voting;
use crate::machine::CommitmentUpdateValidator;
use crate::types::{
	FieldElement,
	IdentityTable,
	InitPolicy,
	PrivateKeyWitness,
	PublicKey
};
use ark_bn254::Fr;
use frame_support::{
	derive_impl,
	parameter_types,
	traits::{ConstU32, ConstU64}
};
use sp_core::H256;
use sp_runtime::{
	traits::{BlakeTwo256, IdentityLookup},
	BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
	pub enum Test
	{
		System: frame_system::{Pallet, Call, Config<T>, Storage, Event<T>},
		RelayVoting: pallet_relay_voting::{Pallet, Call, Storage, Event<T>},
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig as frame_system::DefaultConfig)]
impl frame_system::Config for Test {
	type BaseCallFilter = frame_support::traits::Everything;
	type BlockWeights = ();
	type BlockLength = ();
	type DbWeight = ();
	type RuntimeOrigin = RuntimeOrigin;
	type Nonce = u64;
	type Hash = H256;
	type RuntimeCall = RuntimeCall;
	type Hashing = BlakeTwo256;
	type AccountId = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Block = Block;
	type RuntimeEvent = RuntimeEvent;
	type BlockHashCount = ConstU64<250>;
	type Version = ();
	type PalletInfo = PalletInfo;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type SS58Prefix = ();
	type OnSetCode = ();
	type MaxConsumers = ConstU32<16>;
}

pub fn witness(seed: u64) -> PrivateKeyWitness
{
	PrivateKeyWitness::from_scalar(&Fr::from(seed))
}

pub fn identity_of(witness: &PrivateKeyWitness) -> PublicKey
{
	witness.identity().expect("test witnesses are canonical")
}

pub fn alice() -> PrivateKeyWitness { witness(0xa11ce) }

pub fn bob() -> PrivateKeyWitness { witness(0xb0b) }

/// Never provisioned in a voter slot.
pub fn charlie() -> PrivateKeyWitness { witness(0xc4a2) }

pub fn relay() -> PrivateKeyWitness { witness(0x2e1a7) }

pub fn deployment() -> IdentityTable
{
	IdentityTable {
		first_voter: identity_of(&alice()),
		second_voter: identity_of(&bob()),
		relay_authority: identity_of(&relay())
	}
}

parameter_types! {
	pub static Deployment: IdentityTable = deployment();
	pub static Policy: InitPolicy = InitPolicy::Repeatable;
	pub static RejectCommitmentUpdates: bool = false;
}

/// Accepts every update unless `RejectCommitmentUpdates` is set.
pub struct SwitchableValidator;

impl CommitmentUpdateValidator for SwitchableValidator
{
	fn validate_registration(_: &FieldElement, _: &FieldElement, _: &PublicKey) -> bool
	{
		!RejectCommitmentUpdates::get()
	}

	fn validate_publication(_: &FieldElement, _: &FieldElement, _: &FieldElement, _: &FieldElement) -> bool
	{
		!RejectCommitmentUpdates::get()
	}
}

impl pallet_relay_voting::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Deployment = Deployment;
	type InitializationPolicy = Policy;
	type Validator = SwitchableValidator;
}

pub fn new_test_ext() -> sp_io::TestExternalities {
	let t = RuntimeGenesisConfig {
		system: Default::default(),
	}
	.build_storage()
	.unwrap();
	let mut ext: sp_io::TestExternalities = t.into();
	ext.execute_with(|| System::set_block_number(1));
	ext
}
