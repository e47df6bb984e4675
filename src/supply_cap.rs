multiversx_sc::imports!();

use crate::errors::{ERR_EXCEEDS_CAP, ERR_OVERFLOW};

/// Checkpoint values are kept within 208 bits, so total supply is too.
pub const SAFE_SUPPLY_BITS: u32 = 208;

#[multiversx_sc::module]
pub trait SupplyCapModule:
    crate::voting_power::VotingPowerModule
    + crate::delegation::DelegationModule
    + crate::ledger::BalanceModule
    + crate::checkpoints::CheckpointModule
    + crate::events::EventsModule
{
    // ========================================================
    // INTERNAL: admission
    // ========================================================

    /// Returns the total supply after minting `amount`, or fails if it
    /// would leave the safe domain or exceed `cap` (0 = no cap).
    fn admit_mint(
        &self,
        amount: &BigUint,
        current_total_supply: &BigUint,
        cap: &BigUint,
    ) -> BigUint {
        let new_total_supply = current_total_supply + amount;
        require!(new_total_supply <= self.max_safe_supply(), ERR_OVERFLOW);
        require!(*cap == 0u64 || new_total_supply <= *cap, ERR_EXCEEDS_CAP);

        new_total_supply
    }

    fn max_safe_supply(&self) -> BigUint {
        BigUint::from(2u64).pow(SAFE_SUPPLY_BITS) - BigUint::from(1u64)
    }

    // ========================================================
    // INTERNAL: mint pipeline
    // admission → total supply → balance → holder's power
    // ========================================================

    fn mint_to(&self, to: &ManagedAddress, amount: &BigUint) {
        let new_total_supply =
            self.admit_mint(amount, &self.total_supply().get(), &self.max_supply().get());
        self.set_total_supply(&new_total_supply);

        let delta = self.credit(to, amount);
        self.propagate_balance_change(to, &delta);

        self.transfer_event(&ManagedAddress::zero(), to, amount);
        self.mint_event(to, &new_total_supply, amount);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// 0 means uncapped.
    #[view(maxSupply)]
    #[storage_mapper("maxSupply")]
    fn max_supply(&self) -> SingleValueMapper<BigUint>;
}
