multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_ALLOWANCE, ERR_INSUFFICIENT_BALANCE, ERR_ZERO_ADDRESS};
use crate::types::{BalanceDelta, Checkpoint};

#[multiversx_sc::module]
pub trait BalanceModule:
    crate::checkpoints::CheckpointModule + crate::events::EventsModule
{
    // ========================================================
    // INTERNAL: balance mutations
    // Every mutation writes the account's balance history and
    // hands back the delta for voting power propagation.
    // ========================================================

    fn credit(&self, account: &ManagedAddress, amount: &BigUint) -> BalanceDelta<Self::Api> {
        let new_balance = self.balances(account).update(|balance| {
            *balance += amount;
            balance.clone()
        });
        self.write_checkpoint(self.balance_checkpoints(account), self.clock(), &new_balance);

        BalanceDelta::Credit(amount.clone())
    }

    fn debit(&self, account: &ManagedAddress, amount: &BigUint) -> BalanceDelta<Self::Api> {
        let balance = self.balances(account).get();
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        let new_balance = balance - amount;
        self.balances(account).set(&new_balance);
        self.write_checkpoint(self.balance_checkpoints(account), self.clock(), &new_balance);

        BalanceDelta::Debit(amount.clone())
    }

    /// Debit `from`, credit `to`. A failing leg reverts the whole call.
    fn move_balance(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
    ) -> (BalanceDelta<Self::Api>, BalanceDelta<Self::Api>) {
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let debit = self.debit(from, amount);
        let credit = self.credit(to, amount);
        self.transfer_event(from, to, amount);

        (debit, credit)
    }

    fn set_total_supply(&self, new_total_supply: &BigUint) {
        self.total_supply().set(new_total_supply);
        self.write_checkpoint(
            self.total_supply_checkpoints(),
            self.clock(),
            new_total_supply,
        );
    }

    // ========================================================
    // INTERNAL: allowances
    // ========================================================

    fn set_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        require!(!owner.is_zero() && !spender.is_zero(), ERR_ZERO_ADDRESS);

        self.allowance(owner, spender).set(amount);
        self.approval_event(owner, spender, amount);
    }

    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        let current = self.allowance(owner, spender).get();
        require!(&current >= amount, ERR_INSUFFICIENT_ALLOWANCE);

        self.allowance(owner, spender).set(current - amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balances(account).get()
    }

    #[view(getPastBalance)]
    fn balance_at(&self, account: &ManagedAddress, timepoint: u64) -> BigUint {
        self.lookup_checkpoint(&self.balance_checkpoints(account), timepoint)
    }

    #[view(getPastTotalSupply)]
    fn total_supply_at(&self, timepoint: u64) -> BigUint {
        self.lookup_checkpoint(&self.total_supply_checkpoints(), timepoint)
    }

    #[view(numBalanceCheckpoints)]
    fn num_balance_checkpoints(&self, account: &ManagedAddress) -> usize {
        self.balance_checkpoints(account).len()
    }

    /// `pos` is 0-based.
    #[view(balanceCheckpointAt)]
    fn balance_checkpoint_at(&self, account: &ManagedAddress, pos: usize) -> Checkpoint<Self::Api> {
        self.balance_checkpoints(account).get(pos + 1)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balanceCheckpoints")]
    fn balance_checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalSupplyCheckpoints")]
    fn total_supply_checkpoints(&self) -> VecMapper<Checkpoint<Self::Api>>;

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
