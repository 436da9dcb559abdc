use ethers::signers::{LocalWallet, WalletError};
use ethers::types::{Address, Signature};
use ethers::utils::hash_message;
use tracing::debug;

/// Checks that `signature` was produced by `owner` over `payload`
///
/// Implementations must be pure predicates: no side effects, same answer for
/// the same arguments.
pub trait SignatureVerifier {
    fn verify(&self, payload: &[u8], signature: &Signature, owner: &Address) -> bool;
}

impl<T: SignatureVerifier + ?Sized> SignatureVerifier for &T {
    fn verify(&self, payload: &[u8], signature: &Signature, owner: &Address) -> bool {
        (**self).verify(payload, signature, owner)
    }
}

/// secp256k1 verifier over Ethereum personal messages
///
/// The payload is hashed with the EIP-191 prefix and the signer address is
/// recovered from the signature; it must equal the claimed owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaVerifier;

impl SignatureVerifier for EcdsaVerifier {
    fn verify(&self, payload: &[u8], signature: &Signature, owner: &Address) -> bool {
        match signature.verify(payload.to_vec(), *owner) {
            Ok(()) => true,
            Err(e) => {
                debug!("Signature rejected for {:?}: {}", owner, e);
                false
            }
        }
    }
}

/// Sign a canonical payload the way `EcdsaVerifier` expects
pub fn sign_payload(wallet: &LocalWallet, payload: &[u8]) -> Result<Signature, WalletError> {
    wallet.sign_hash(hash_message(payload))
}
