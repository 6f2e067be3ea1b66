use crate::types::ContractState;
use crate::{
    Config,
    MembershipCommitment,
    Pallet,
    RelayAuthority,
    VoteHistoryCommitment,
    VoterSlotOne,
    VoterSlotTwo
};

/// Read and write access to the fixed set of contract fields.
pub trait StateStore
{
    /// True once `init` has written the fields.
    fn is_initialized() -> bool;

    /// Snapshot of every field.
    fn load() -> ContractState;

    /// Writes the fields of `next` that differ from `prior`, returning the number of writes.
    /// An uninitialized store has every field written.
    fn commit(prior: &ContractState, next: &ContractState) -> u64;
}

impl<T: Config> StateStore for Pallet<T>
{
    fn is_initialized() -> bool
    {
        RelayAuthority::<T>::exists()
    }

    fn load() -> ContractState
    {
        ContractState {
            vote_history_commitment: VoteHistoryCommitment::<T>::get(),
            membership_commitment: MembershipCommitment::<T>::get(),
            voter_slot_one: VoterSlotOne::<T>::get(),
            voter_slot_two: VoterSlotTwo::<T>::get(),
            relay_authority: RelayAuthority::<T>::get()
        }
    }

    fn commit(prior: &ContractState, next: &ContractState) -> u64
    {
        let fresh = !Self::is_initialized();
        let mut writes = 0;

        if fresh || prior.vote_history_commitment != next.vote_history_commitment
        {
            VoteHistoryCommitment::<T>::put(next.vote_history_commitment);
            writes += 1;
        }
        if fresh || prior.membership_commitment != next.membership_commitment
        {
            MembershipCommitment::<T>::put(next.membership_commitment);
            writes += 1;
        }
        if fresh || prior.voter_slot_one != next.voter_slot_one
        {
            VoterSlotOne::<T>::put(next.voter_slot_one);
            writes += 1;
        }
        if fresh || prior.voter_slot_two != next.voter_slot_two
        {
            VoterSlotTwo::<T>::put(next.voter_slot_two);
            writes += 1;
        }
        if fresh || prior.relay_authority != next.relay_authority
        {
            RelayAuthority::<T>::put(next.relay_authority);
            writes += 1;
        }

        writes
    }
}
