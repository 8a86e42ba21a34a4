mod builder;
mod case;
mod data;
mod error;
mod harness;
mod key;
mod provider;
#[cfg(feature = "rustcrypto")]
mod rustcrypto;

pub use builder::test_vectors;
pub use case::{
    ALGORITHM_NAME, AesGcmParams, Group, ILLEGAL_TAG_LENGTHS, KeySize, TAG_LENGTHS, TestCase,
    TestVectors, tag_byte_len,
};
pub use error::{Error, Result};
pub use harness::{CaseReport, Outcome, Report, RunOptions, run};
pub use key::Key;
pub use provider::GcmProvider;
#[cfg(feature = "rustcrypto")]
pub use rustcrypto::RustCryptoGcm;

/// The literal byte tables the vectors are assembled from.
pub mod tables {
    pub use super::data::{
        ADDITIONAL_DATA, IV, PLAINTEXT, ciphertext, key, tag, tag_with_empty_ad,
    };
}
