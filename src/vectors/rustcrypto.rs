//! [`GcmProvider`] backed by the RustCrypto `aes-gcm` crate.

use aes_gcm::AesGcm;
use aes_gcm::aead::consts::{U12, U16, U32};
use aes_gcm::aead::{self, AeadCore, AeadInPlace, KeyInit};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::vectors::case::{AesGcmParams, KeySize, tag_byte_len};
use crate::vectors::error::{Error, Result};
use crate::vectors::key::Key;
use crate::vectors::provider::GcmProvider;

/// AES-GCM through `aes-gcm`, with WebCrypto tag-length semantics layered on top.
///
/// `aes-gcm` only emits 96- to 128-bit tags, so every operation computes the full
/// 128-bit tag and truncates it to the leading `tag_length / 8` bytes. IVs of 12, 16,
/// and 32 bytes are supported.
#[derive(Copy, Clone, Debug, Default)]
pub struct RustCryptoGcm;

impl GcmProvider for RustCryptoGcm {
    type Key = Key;

    fn import_key(&self, raw: &[u8]) -> Result<Key> {
        Key::try_from_slice(raw)
    }

    fn encrypt(&self, params: &AesGcmParams, key: &Key, plaintext: &[u8]) -> Result<Vec<u8>> {
        let tag_len = tag_byte_len(params.tag_length)?;
        let aad = params.additional_data.unwrap_or_default();

        let mut out = Vec::with_capacity(plaintext.len() + tag_len);
        out.extend_from_slice(plaintext);
        let tag = seal(key, params.iv, aad, &mut out)?;
        out.extend_from_slice(&tag[..tag_len]);

        debug!(
            key_bits = key.key_size().bits(),
            tag_bits = params.tag_length,
            len = out.len(),
            "encrypted"
        );
        Ok(out)
    }

    fn decrypt(&self, params: &AesGcmParams, key: &Key, data: &[u8]) -> Result<Vec<u8>> {
        let tag_len = tag_byte_len(params.tag_length)?;
        let aad = params.additional_data.unwrap_or_default();

        if data.len() < tag_len {
            return Err(Error::InvalidCiphertext {
                len: data.len(),
                context: "shorter than declared tag length",
            });
        }
        let (ciphertext, received_tag) = data.split_at(data.len() - tag_len);

        // CTR is symmetric, so sealing the ciphertext yields the candidate plaintext.
        // The tag from that pass covers the wrong bytes and is dropped.
        let mut plaintext = ciphertext.to_vec();
        seal(key, params.iv, aad, &mut plaintext)?;

        // re-encrypting the candidate reproduces the ciphertext and its full tag
        let mut resealed = plaintext.clone();
        let computed_tag = seal(key, params.iv, aad, &mut resealed)?;

        if !bool::from(computed_tag[..tag_len].ct_eq(received_tag)) {
            return Err(Error::AuthFailed);
        }

        debug!(
            key_bits = key.key_size().bits(),
            tag_bits = params.tag_length,
            len = plaintext.len(),
            "decrypted"
        );
        Ok(plaintext)
    }
}

/// Encrypts `buffer` in place and returns the full 128-bit tag.
fn seal(key: &Key, iv: &[u8], aad: &[u8], buffer: &mut [u8]) -> Result<[u8; 16]> {
    let raw = key.as_bytes();
    match (key.key_size(), iv.len()) {
        (KeySize::Bits128, 12) => seal_with::<AesGcm<Aes128, U12>>(raw, iv, aad, buffer),
        (KeySize::Bits128, 16) => seal_with::<AesGcm<Aes128, U16>>(raw, iv, aad, buffer),
        (KeySize::Bits128, 32) => seal_with::<AesGcm<Aes128, U32>>(raw, iv, aad, buffer),
        (KeySize::Bits192, 12) => seal_with::<AesGcm<Aes192, U12>>(raw, iv, aad, buffer),
        (KeySize::Bits192, 16) => seal_with::<AesGcm<Aes192, U16>>(raw, iv, aad, buffer),
        (KeySize::Bits192, 32) => seal_with::<AesGcm<Aes192, U32>>(raw, iv, aad, buffer),
        (KeySize::Bits256, 12) => seal_with::<AesGcm<Aes256, U12>>(raw, iv, aad, buffer),
        (KeySize::Bits256, 16) => seal_with::<AesGcm<Aes256, U16>>(raw, iv, aad, buffer),
        (KeySize::Bits256, 32) => seal_with::<AesGcm<Aes256, U32>>(raw, iv, aad, buffer),
        (_, len) => Err(Error::UnsupportedIvLength { len }),
    }
}

fn seal_with<C>(key: &[u8], iv: &[u8], aad: &[u8], buffer: &mut [u8]) -> Result<[u8; 16]>
where
    C: KeyInit + AeadInPlace + AeadCore<TagSize = U16>,
{
    let cipher =
        C::new_from_slice(key).map_err(|_| Error::InvalidKeyLength { len: key.len() })?;
    let nonce = aead::Nonce::<C>::from_exact_iter(iv.iter().copied())
        .ok_or(Error::UnsupportedIvLength { len: iv.len() })?;

    let tag = cipher
        .encrypt_in_place_detached(&nonce, aad, buffer)
        .map_err(|_| Error::Backend)?;

    let mut out = [0u8; 16];
    out.copy_from_slice(&tag);
    Ok(out)
}
