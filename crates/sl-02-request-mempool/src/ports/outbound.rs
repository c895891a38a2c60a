//! Outbound (driven) ports for the request mempool.

/// Verifies a signed message against a claimed address.
///
/// Implementations must be pure: same inputs, same answer. Malformed
/// addresses or signatures verify as `false` rather than erroring.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool;
}

impl<T: SignatureVerifier + ?Sized> SignatureVerifier for std::sync::Arc<T> {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        (**self).verify(message, address, signature)
    }
}

/// Accepts exactly `"signed:{address}:{message}"`.
#[cfg(test)]
pub struct MockSignatureVerifier;

#[cfg(test)]
impl MockSignatureVerifier {
    pub fn sign(message: &str, address: &str) -> String {
        format!("signed:{}:{}", address, message)
    }
}

#[cfg(test)]
impl SignatureVerifier for MockSignatureVerifier {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        signature == Self::sign(message, address)
    }
}
