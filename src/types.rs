multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Checkpoint — one entry of a time-indexed history
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    /// Clock value at which `value` became current
    pub timepoint: u64,
    pub value: BigUint<M>,
}

// ============================================================
// Clock Mode — what the checkpoint clock counts
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ClockMode {
    /// Block nonce. Strictly increasing per block.
    BlockNumber,
    /// Block timestamp in seconds.
    Timestamp,
}

// ============================================================
// Capability — entries of the authorization table
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Capability {
    /// May grant and revoke capabilities.
    Admin,
    /// May call mint and batchMint.
    Minter,
}

// ============================================================
// Pipeline values — never stored
// ============================================================

/// Signed change of one account's balance, pushed on to voting power.
#[derive(Clone, Debug)]
pub enum BalanceDelta<M: ManagedTypeApi> {
    Credit(BigUint<M>),
    Debit(BigUint<M>),
}

impl<M: ManagedTypeApi> BalanceDelta<M> {
    pub fn amount(&self) -> &BigUint<M> {
        match self {
            BalanceDelta::Credit(amount) | BalanceDelta::Debit(amount) => amount,
        }
    }
}

/// Outcome of a delegation change: `weight` of power leaves
/// `previous_holder` and arrives at `new_holder`.
#[derive(Clone, Debug)]
pub struct DelegationMove<M: ManagedTypeApi> {
    pub previous_holder: ManagedAddress<M>,
    pub new_holder: ManagedAddress<M>,
    pub weight: BigUint<M>,
}
