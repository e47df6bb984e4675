multiversx_sc::imports!();

use crate::errors::ERR_UNDERFLOW;
use crate::types::{BalanceDelta, Checkpoint, DelegationMove};

/// Voting power only ever changes through deltas pushed into this module.
/// It never reads balances or delegations on its own, except to resolve
/// the holder a balance delta belongs to.
#[multiversx_sc::module]
pub trait VotingPowerModule:
    crate::delegation::DelegationModule
    + crate::ledger::BalanceModule
    + crate::checkpoints::CheckpointModule
    + crate::events::EventsModule
{
    // ========================================================
    // INTERNAL: propagation pipeline
    // ========================================================

    fn apply_power_delta(&self, holder: &ManagedAddress, delta: &BalanceDelta<Self::Api>) {
        let history = self.vote_checkpoints(holder);
        let previous = self.latest_checkpoint(&history);

        let new_power = match delta {
            BalanceDelta::Credit(amount) => &previous + amount,
            BalanceDelta::Debit(amount) => {
                require!(&previous >= amount, ERR_UNDERFLOW);
                &previous - amount
            }
        };

        self.write_checkpoint(history, self.clock(), &new_power);
        self.delegate_votes_changed_event(holder, &previous, &new_power);
    }

    /// A balance change of `account` lands on its effective holder,
    /// not on `account` itself.
    fn propagate_balance_change(&self, account: &ManagedAddress, delta: &BalanceDelta<Self::Api>) {
        if *delta.amount() == 0u64 {
            return;
        }

        let holder = self.effective_holder(account);
        self.apply_power_delta(&holder, delta);
    }

    fn move_voting_power(&self, delegation_move: &DelegationMove<Self::Api>) {
        if delegation_move.previous_holder == delegation_move.new_holder
            || delegation_move.weight == 0u64
        {
            return;
        }

        self.apply_power_delta(
            &delegation_move.previous_holder,
            &BalanceDelta::Debit(delegation_move.weight.clone()),
        );
        self.apply_power_delta(
            &delegation_move.new_holder,
            &BalanceDelta::Credit(delegation_move.weight.clone()),
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVotes)]
    fn get_votes(&self, account: &ManagedAddress) -> BigUint {
        self.latest_checkpoint(&self.vote_checkpoints(account))
    }

    #[view(getPastVotes)]
    fn power_at(&self, account: &ManagedAddress, timepoint: u64) -> BigUint {
        self.lookup_checkpoint(&self.vote_checkpoints(account), timepoint)
    }

    #[view(numCheckpoints)]
    fn num_checkpoints(&self, account: &ManagedAddress) -> usize {
        self.vote_checkpoints(account).len()
    }

    /// `pos` is 0-based.
    #[view(checkpointAt)]
    fn checkpoint_at(&self, account: &ManagedAddress, pos: usize) -> Checkpoint<Self::Api> {
        self.vote_checkpoints(account).get(pos + 1)
    }

    #[view(getVotesHistory)]
    fn get_votes_history(
        &self,
        account: &ManagedAddress,
    ) -> MultiValueEncoded<Checkpoint<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for checkpoint in self.vote_checkpoints(account).iter() {
            result.push(checkpoint);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voteCheckpoints")]
    fn vote_checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;
}
