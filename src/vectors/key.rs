//! Defines the [`Key`] struct, which holds raw AES key material of 128, 192, or 256 bits.

use crate::vectors::case::KeySize;
use crate::vectors::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Validated AES key material. Built from a slice that is 16, 24, or 32 bytes long.
/// This is the imported key handle of the `rustcrypto` provider.
///
/// ## Examples
/// ```
/// # fn main() -> gcm_vectors::Result<()> {
/// use gcm_vectors::{Key, KeySize};
///
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_256 = Key::try_from_slice(&key_bytes)?;
///
/// assert_eq!(my_key_128.key_size(), KeySize::Bits128);
/// assert_eq!(my_key_256.as_bytes(), &key_bytes[..]);
///
/// // Anything other than 16, 24, or 32 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            24 => KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            32 => KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub fn key_size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::data;

    #[test]
    fn vector_keys_import() -> Result<()> {
        for size in KeySize::ALL {
            let key = Key::try_from_slice(data::key(size))?;
            assert_eq!(key.key_size(), size);
            assert_eq!(key.as_bytes(), data::key(size));
        }
        Ok(())
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0, 8, 15, 17, 20, 31, 33, 64] {
            let bytes = vec![0u8; len];
            assert_eq!(
                Key::try_from_slice(&bytes),
                Err(Error::InvalidKeyLength { len })
            );
        }
    }
}
