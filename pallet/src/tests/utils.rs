use frame_support::assert_ok;
use crate::mock::*;
use crate::types::ContractState;

/// Snapshot of the stored contract fields.
pub fn state() -> ContractState
{
    RelayVoting::contract_state()
}

/// Runs `init` from a signed origin, as every scenario starts with it.
pub fn initialize()
{
    assert_ok!(RelayVoting::init(RuntimeOrigin::signed(0)));
}
