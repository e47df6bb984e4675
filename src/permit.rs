multiversx_sc::imports!();

use crate::errors::{ERR_EXPIRED_DEADLINE, ERR_INVALID_SIGNATURE};

pub const PERMIT_DOMAIN: &[u8] = b"permit";
pub const DELEGATION_DOMAIN: &[u8] = b"delegateBySig";

/// Off-chain approvals. The signer's address is its Ed25519 public key,
/// so the VM verifies signatures against it directly.
#[multiversx_sc::module]
pub trait PermitModule {
    /// Checks deadline and nonce, then verifies `signature` over
    /// `contract ‖ domain ‖ payload ‖ nonce ‖ deadline`. Consumes the nonce.
    fn verify_signed_message(
        &self,
        signer: &ManagedAddress,
        domain: &[u8],
        payload: &ManagedBuffer,
        nonce: u64,
        deadline: u64,
        signature: &ManagedBuffer,
    ) {
        require!(
            self.blockchain().get_block_timestamp() <= deadline,
            ERR_EXPIRED_DEADLINE
        );
        self.use_checked_nonce(signer, nonce);

        let mut message = ManagedBuffer::new();
        message.append(self.blockchain().get_sc_address().as_managed_buffer());
        message.append_bytes(domain);
        message.append(payload);
        message.append_bytes(&nonce.to_be_bytes()[..]);
        message.append_bytes(&deadline.to_be_bytes()[..]);

        self.crypto()
            .verify_ed25519(signer.as_managed_buffer(), &message, signature);
    }

    /// Stale or future nonces are rejected; the counter only moves forward.
    fn use_checked_nonce(&self, owner: &ManagedAddress, nonce: u64) {
        let current = self.nonces(owner).get();
        require!(nonce == current, ERR_INVALID_SIGNATURE);

        self.nonces(owner).set(current + 1);
    }

    #[view(nonces)]
    #[storage_mapper("nonces")]
    fn nonces(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;
}
