#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod checkpoints;
pub mod delegation;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod permit;
pub mod supply_cap;
pub mod types;
pub mod voting_power;

use errors::{ERR_LENGTH_MISMATCH, ERR_ZERO_ADDRESS};
use permit::{DELEGATION_DOMAIN, PERMIT_DOMAIN};
use supply_cap::SAFE_SUPPLY_BITS;
use types::{Capability, ClockMode};

// ============================================================
// Contract
// Token ledger with checkpointed balances and delegated,
// checkpointed voting power.
// ============================================================

#[multiversx_sc::contract]
pub trait VotesToken:
    access_control::AccessControlModule
    + checkpoints::CheckpointModule
    + delegation::DelegationModule
    + events::EventsModule
    + ledger::BalanceModule
    + permit::PermitModule
    + supply_cap::SupplyCapModule
    + voting_power::VotingPowerModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `max_supply` of 0 leaves the supply uncapped. The deployer
    /// becomes the first admin.
    #[init]
    fn init(&self, max_supply: BigUint, clock_mode: ClockMode) {
        self.max_supply().set(&max_supply);
        self.clock_mode().set(clock_mode);
        self.total_supply().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        self.grant_capability(&deployer, Capability::Admin);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint / batchMint
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_capability(Capability::Minter);
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        // Accepted, but there is nothing to record
        if amount == 0u64 {
            self.mint_event(&to, &self.total_supply().get(), &amount);
            return;
        }

        self.mint_to(&to, &amount);
    }

    /// Entries with a null recipient or a zero amount are skipped rather
    /// than failing the batch. Only a length mismatch rejects it up front.
    #[endpoint(batchMint)]
    fn batch_mint(&self, recipients: ManagedVec<ManagedAddress>, amounts: ManagedVec<BigUint>) {
        self.require_capability(Capability::Minter);
        require!(recipients.len() == amounts.len(), ERR_LENGTH_MISMATCH);

        for (to, amount) in recipients.iter().zip(amounts.iter()) {
            if to.is_zero() || *amount == 0u64 {
                continue;
            }
            self.mint_to(&to, &amount);
        }
    }

    // ========================================================
    // ENDPOINT: transfers and allowances
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.transfer_tokens(&caller, &to, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        require!(!from.is_zero(), ERR_ZERO_ADDRESS);

        let spender = self.blockchain().get_caller();
        self.spend_allowance(&from, &spender, &amount);
        self.transfer_tokens(&from, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let owner = self.blockchain().get_caller();
        self.set_allowance(&owner, &spender, &amount);
    }

    /// Signed approval: `owner` authorizes `spender` off-chain and anyone
    /// may submit it.
    #[endpoint(permit)]
    fn permit(
        &self,
        owner: ManagedAddress,
        spender: ManagedAddress,
        amount: BigUint,
        nonce: u64,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        let mut payload = ManagedBuffer::new();
        payload.append(owner.as_managed_buffer());
        payload.append(spender.as_managed_buffer());
        payload.append(&amount.to_bytes_be_buffer());

        self.verify_signed_message(&owner, PERMIT_DOMAIN, &payload, nonce, deadline, &signature);
        self.set_allowance(&owner, &spender, &amount);
    }

    // ========================================================
    // ENDPOINT: delegation
    // ========================================================

    #[endpoint(delegateTo)]
    fn delegate_to(&self, delegatee: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.delegate_votes(&caller, &delegatee);
    }

    #[endpoint(delegateBySig)]
    fn delegate_by_sig(
        &self,
        delegator: ManagedAddress,
        delegatee: ManagedAddress,
        nonce: u64,
        expiry: u64,
        signature: ManagedBuffer,
    ) {
        let mut payload = ManagedBuffer::new();
        payload.append(delegator.as_managed_buffer());
        payload.append(delegatee.as_managed_buffer());

        self.verify_signed_message(
            &delegator,
            DELEGATION_DOMAIN,
            &payload,
            nonce,
            expiry,
            &signature,
        );
        self.delegate_votes(&delegator, &delegatee);
    }

    // ========================================================
    // ENDPOINT: setMinter
    // ========================================================

    #[endpoint(setMinter)]
    fn set_minter(&self, account: ManagedAddress) {
        self.require_capability(Capability::Admin);
        require!(!account.is_zero(), ERR_ZERO_ADDRESS);

        self.grant_capability(&account, Capability::Minter);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Moves balance, then pushes each leg's delta to that account's holder.
    fn transfer_tokens(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let (debit, credit) = self.move_balance(from, to, amount);

        self.propagate_balance_change(from, &debit);
        self.propagate_balance_change(to, &credit);
    }

    fn delegate_votes(&self, account: &ManagedAddress, delegatee: &ManagedAddress) {
        let delegation_move = self.set_delegate(account, delegatee);
        self.move_voting_power(&delegation_move);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTokenConfig)]
    fn get_token_config(&self) -> MultiValue3<BigUint, ClockMode, u32> {
        let max_supply = self.max_supply().get();
        let clock_mode = self.clock_mode().get();
        (max_supply, clock_mode, SAFE_SUPPLY_BITS).into()
    }
}
