multiversx_sc::imports!();

use crate::types::Capability;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mint")]
    fn mint_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] total_supply: &BigUint,
        amount: &BigUint,
    );

    #[event("delegateChanged")]
    fn delegate_changed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] from_delegate: &ManagedAddress,
        #[indexed] to_delegate: &ManagedAddress,
    );

    #[event("delegateVotesChanged")]
    fn delegate_votes_changed_event(
        &self,
        #[indexed] delegate: &ManagedAddress,
        #[indexed] previous_votes: &BigUint,
        new_votes: &BigUint,
    );

    #[event("capabilityGranted")]
    fn capability_granted_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] capability: Capability,
        granted_by: &ManagedAddress,
    );

    #[event("capabilityRevoked")]
    fn capability_revoked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] capability: Capability,
        revoked_by: &ManagedAddress,
    );
}
