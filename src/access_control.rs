multiversx_sc::imports!();

use crate::errors::{ERR_UNAUTHORIZED, ERR_ZERO_ADDRESS};
use crate::types::Capability;

/// Capability table: each capability maps to the set of accounts holding it.
#[multiversx_sc::module]
pub trait AccessControlModule: crate::events::EventsModule {
    #[endpoint(grantCapability)]
    fn grant_capability_endpoint(&self, account: ManagedAddress, capability: Capability) {
        self.require_capability(Capability::Admin);
        require!(!account.is_zero(), ERR_ZERO_ADDRESS);

        self.grant_capability(&account, capability);
    }

    #[endpoint(revokeCapability)]
    fn revoke_capability_endpoint(&self, account: ManagedAddress, capability: Capability) {
        self.require_capability(Capability::Admin);

        if self.capability_holders(capability).swap_remove(&account) {
            let caller = self.blockchain().get_caller();
            self.capability_revoked_event(&account, capability, &caller);
        }
    }

    fn grant_capability(&self, account: &ManagedAddress, capability: Capability) {
        if self.capability_holders(capability).insert(account.clone()) {
            let caller = self.blockchain().get_caller();
            self.capability_granted_event(account, capability, &caller);
        }
    }

    fn require_capability(&self, capability: Capability) {
        let caller = self.blockchain().get_caller();
        require!(self.has_capability(&caller, capability), ERR_UNAUTHORIZED);
    }

    #[view(hasCapability)]
    fn has_capability(&self, account: &ManagedAddress, capability: Capability) -> bool {
        self.capability_holders(capability).contains(account)
    }

    #[storage_mapper("capabilityHolders")]
    fn capability_holders(&self, capability: Capability) -> UnorderedSetMapper<ManagedAddress>;
}
