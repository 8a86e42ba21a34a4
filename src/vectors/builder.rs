use tracing::trace;

use crate::vectors::case::{
    ALGORITHM_NAME, AesGcmParams, ILLEGAL_TAG_LENGTHS, KeySize, TAG_LENGTHS, TestCase, TestVectors,
};
use crate::vectors::data::{self, ADDITIONAL_DATA, IV, PLAINTEXT};

/// Builds the AES-GCM vectors.
///
/// - `passing`: every key size × every permitted tag length, once with additional
///   data and once without (42 cases).
/// - `failing`: every key size × every tag length in [`ILLEGAL_TAG_LENGTHS`], with
///   additional data (15 cases).
/// - `decryption_failing`: empty.
///
/// Keys are left unset. Call [`TestVectors::hydrate`] before running them.
///
/// ## Examples
/// ```
/// use gcm_vectors::{KeySize, test_vectors};
///
/// let vectors = test_vectors::<()>();
/// assert_eq!(vectors.passing.len(), 42);
/// assert_eq!(vectors.failing.len(), 15);
/// assert!(vectors.decryption_failing.is_empty());
///
/// let first = &vectors.passing[0];
/// assert_eq!(first.name, "AES-GCM 128-bit key, 32-bit tag");
/// assert_eq!(first.key_size, KeySize::Bits128);
/// assert!(first.key.is_none());
/// ```
pub fn test_vectors<K>() -> TestVectors<K> {
    let mut passing = Vec::with_capacity(KeySize::ALL.len() * TAG_LENGTHS.len() * 2);
    for key_size in KeySize::ALL {
        let ciphertext = data::ciphertext(key_size);
        for tag_length in TAG_LENGTHS {
            let byte_count = usize::from(tag_length / 8);

            passing.push(case(
                format!("AES-GCM {}-bit key, {}-bit tag", key_size.bits(), tag_length),
                key_size,
                Some(&ADDITIONAL_DATA),
                tag_length,
                sealed(ciphertext, &data::tag(key_size)[..byte_count]),
            ));

            passing.push(case(
                format!(
                    "AES-GCM {}-bit key, no additional data, {}-bit tag",
                    key_size.bits(),
                    tag_length
                ),
                key_size,
                None,
                tag_length,
                sealed(ciphertext, &data::tag_with_empty_ad(key_size)[..byte_count]),
            ));
        }
    }

    // result is never compared for these, encryption has to fail first
    let mut failing = Vec::with_capacity(KeySize::ALL.len() * ILLEGAL_TAG_LENGTHS.len());
    for key_size in KeySize::ALL {
        for bad_tag_length in ILLEGAL_TAG_LENGTHS {
            failing.push(case(
                format!(
                    "AES-GCM {}-bit key, illegal tag length {}-bits",
                    key_size.bits(),
                    bad_tag_length
                ),
                key_size,
                Some(&ADDITIONAL_DATA),
                bad_tag_length,
                data::ciphertext(key_size).to_vec(),
            ));
        }
    }

    trace!(
        passing = passing.len(),
        failing = failing.len(),
        "built AES-GCM vectors"
    );

    TestVectors {
        passing,
        failing,
        decryption_failing: Vec::new(),
    }
}

fn case<K>(
    name: String,
    key_size: KeySize,
    additional_data: Option<&'static [u8]>,
    tag_length: u16,
    result: Vec<u8>,
) -> TestCase<K> {
    TestCase {
        name,
        key_size,
        key_material: data::key(key_size),
        key: None,
        algorithm: AesGcmParams {
            name: ALGORITHM_NAME,
            iv: &IV,
            additional_data,
            tag_length,
        },
        plaintext: &PLAINTEXT,
        result,
    }
}

/// `ciphertext || tag`
fn sealed(ciphertext: &[u8], tag: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ciphertext.len() + tag.len());
    out.extend_from_slice(ciphertext);
    out.extend_from_slice(tag);
    out
}
