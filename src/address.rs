//! ARK address format
//!
//! An address is the base58check encoding of a 21-byte payload:
//! one network version byte followed by the RIPEMD-160 digest of the
//! compressed secp256k1 public key.

use bitcoin::base58;
use bitcoin::hashes::{ripemd160, Hash};

use crate::error::SendError;
use crate::network::ArkNetwork;

const PAYLOAD_LEN: usize = 21;

/// Synchronous format check: checksum, payload length and network version.
pub fn is_valid_address(address: &str, network: ArkNetwork) -> bool {
    match base58::decode_check(address) {
        Ok(payload) => {
            payload.len() == PAYLOAD_LEN && payload[0] == network.address_version()
        }
        Err(_) => false,
    }
}

/// Derive the address for a hex-encoded compressed public key.
pub fn address_from_public_key(public_key: &str, network: ArkNetwork) -> Result<String, SendError> {
    let key = parse_public_key(public_key)?;

    let digest = ripemd160::Hash::hash(&key.serialize());
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(network.address_version());
    payload.extend_from_slice(digest.as_byte_array());

    Ok(base58::encode_check(&payload))
}

/// Parse a hex-encoded secp256k1 public key (compressed or uncompressed).
pub fn parse_public_key(public_key: &str) -> Result<secp256k1::PublicKey, SendError> {
    let bytes = hex::decode(public_key.trim())
        .map_err(|e| SendError::InvalidPublicKey(format!("not hex: {}", e)))?;
    secp256k1::PublicKey::from_slice(&bytes)
        .map_err(|e| SendError::InvalidPublicKey(e.to_string()))
}
