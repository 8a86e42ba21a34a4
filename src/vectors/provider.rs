use crate::vectors::case::AesGcmParams;
use crate::vectors::error::Result;

/// The cryptographic API the vectors are run against.
///
/// Mirrors a WebCrypto-style surface: raw key import, then `encrypt`/`decrypt` driven
/// by an [`AesGcmParams`] record. Implementations must reject a `tag_length` outside
/// [`TAG_LENGTHS`](crate::TAG_LENGTHS) with [`InvalidTagLength`](crate::Error::InvalidTagLength)
/// before touching the data.
pub trait GcmProvider {
    /// Imported key handle.
    type Key;

    fn import_key(&self, raw: &[u8]) -> Result<Self::Key>;

    /// Returns `ciphertext || tag`, the tag truncated to `params.tag_length` bits.
    fn encrypt(&self, params: &AesGcmParams, key: &Self::Key, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Inverse of [`encrypt`](GcmProvider::encrypt). Fails if the trailing tag does not authenticate.
    fn decrypt(&self, params: &AesGcmParams, key: &Self::Key, data: &[u8]) -> Result<Vec<u8>>;
}
