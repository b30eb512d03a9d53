//! Token services: the access-token codec and the refresh-token manager.

pub mod codec;
pub mod refresh;

pub use codec::AccessTokenCodec;
pub use refresh::RefreshTokenManager;

use rand::RngCore;

/// Random identifier of `bytes * 8` bits of entropy, hex-encoded.
pub(crate) fn generate_token_id(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ids_are_unique_and_sized() {
        let a = generate_token_id(16);
        let b = generate_token_id(16);
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
