multiversx_sc::imports!();

use crate::types::DelegationMove;

#[multiversx_sc::module]
pub trait DelegationModule:
    crate::ledger::BalanceModule
    + crate::checkpoints::CheckpointModule
    + crate::events::EventsModule
{
    /// The account currently receiving `account`'s voting power.
    /// Resolution is one hop: the delegate's own delegation is not followed.
    fn effective_holder(&self, account: &ManagedAddress) -> ManagedAddress {
        let delegate = self.delegate(account);
        if delegate.is_empty() {
            account.clone()
        } else {
            delegate.get()
        }
    }

    /// Records the new delegation and reports how much power has to move.
    /// Delegating to oneself or to the null account clears the delegation.
    fn set_delegate(
        &self,
        account: &ManagedAddress,
        new_delegate: &ManagedAddress,
    ) -> DelegationMove<Self::Api> {
        let previous_holder = self.effective_holder(account);

        if new_delegate.is_zero() || new_delegate == account {
            self.delegate(account).clear();
        } else {
            self.delegate(account).set(new_delegate);
        }

        let new_holder = self.effective_holder(account);
        self.delegate_changed_event(account, &previous_holder, &new_holder);

        DelegationMove {
            previous_holder,
            new_holder,
            weight: self.balances(account).get(),
        }
    }

    #[view(delegates)]
    fn delegates(&self, account: &ManagedAddress) -> ManagedAddress {
        self.effective_holder(account)
    }

    /// Empty means the account holds its own power.
    #[storage_mapper("delegate")]
    fn delegate(&self, account: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;
}
