//! AES-GCM encryption test vectors for WebCrypto-style APIs.
//!
//! [`test_vectors`] assembles fixed keys, IV, additional data, plaintext, and expected
//! `ciphertext || tag` outputs into passing cases (every key size × every permitted tag
//! length, with and without additional data) and failing cases (illegal tag lengths).
//! Keys start unset: [hydrate](TestVectors::hydrate) them through a [`GcmProvider`], then
//! [`run`] the vectors against it.

mod vectors;

pub use vectors::{
    ALGORITHM_NAME, AesGcmParams, CaseReport, Error, GcmProvider, Group, ILLEGAL_TAG_LENGTHS,
    Key, KeySize, Outcome, Report, Result, RunOptions, TAG_LENGTHS, TestCase, TestVectors, run,
    tables, tag_byte_len, test_vectors,
};

#[cfg(feature = "rustcrypto")]
pub use vectors::RustCryptoGcm;
