//! Test case records and the parameters handed to `encrypt`/`decrypt`.

use tracing::debug;

use crate::vectors::error::{Error, Result};
use crate::vectors::provider::GcmProvider;

/// Tag lengths (bits) accepted by AES-GCM.
pub const TAG_LENGTHS: [u16; 7] = [32, 64, 96, 104, 112, 120, 128];

/// Tag lengths (bits) that must be rejected: not a multiple of 8, below 96 but not
/// 32 or 64, or above 128.
pub const ILLEGAL_TAG_LENGTHS: [u16; 5] = [24, 48, 72, 95, 129];

/// Algorithm name carried by every [`AesGcmParams`].
pub const ALGORITHM_NAME: &str = "AES-GCM";

/// Returns the tag length in bytes, or [`Error::InvalidTagLength`] if `bits` is not
/// one of [`TAG_LENGTHS`].
pub fn tag_byte_len(bits: u16) -> Result<usize> {
    if TAG_LENGTHS.contains(&bits) {
        Ok(usize::from(bits / 8))
    } else {
        Err(Error::InvalidTagLength { bits })
    }
}

/// AES key size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// All key sizes, in the order the builder enumerates them.
    pub const ALL: [KeySize; 3] = [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256];

    pub fn bits(self) -> u16 {
        match self {
            KeySize::Bits128 => 128,
            KeySize::Bits192 => 192,
            KeySize::Bits256 => 256,
        }
    }

    pub fn byte_len(self) -> usize {
        usize::from(self.bits() / 8)
    }
}

/// Algorithm parameters for an AES-GCM `encrypt` or `decrypt` call.
///
/// `additional_data: None` and `Some(&[])` are different cases: the vectors carry a
/// distinct expected tag for the absent variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AesGcmParams {
    pub name: &'static str,
    pub iv: &'static [u8],
    pub additional_data: Option<&'static [u8]>,
    /// Declared tag length in bits. Deliberately unvalidated so illegal lengths can be expressed.
    pub tag_length: u16,
}

/// A single vector.
///
/// `key` starts as `None`. A caller must [hydrate](TestCase::hydrate) it through a
/// [`GcmProvider`] before the case can be run.
#[derive(Clone, Debug)]
pub struct TestCase<K> {
    pub name: String,
    pub key_size: KeySize,
    pub key_material: &'static [u8],
    pub key: Option<K>,
    pub algorithm: AesGcmParams,
    pub plaintext: &'static [u8],
    /// `ciphertext || truncated tag` for passing cases. For failing cases only the
    /// ciphertext, which is never compared.
    pub result: Vec<u8>,
}

impl<K> TestCase<K> {
    /// Imports `key_material` through `provider` and stores the handle in `key`.
    pub fn hydrate<P>(&mut self, provider: &P) -> Result<()>
    where
        P: GcmProvider<Key = K> + ?Sized,
    {
        self.key = Some(provider.import_key(self.key_material)?);
        debug!(case = %self.name, "imported key");
        Ok(())
    }

    /// Returns the imported key, or [`Error::KeyNotImported`] if the case was never hydrated.
    pub fn key(&self) -> Result<&K> {
        self.key.as_ref().ok_or_else(|| Error::KeyNotImported {
            name: self.name.clone(),
        })
    }

    pub fn is_hydrated(&self) -> bool {
        self.key.is_some()
    }
}

/// Which list of [`TestVectors`] a case belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Passing,
    Failing,
    DecryptionFailing,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Passing, Group::Failing, Group::DecryptionFailing];

    pub fn as_str(self) -> &'static str {
        match self {
            Group::Passing => "passing",
            Group::Failing => "failing",
            Group::DecryptionFailing => "decryption-failing",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three case lists returned by [`test_vectors`](crate::test_vectors).
#[derive(Clone, Debug)]
pub struct TestVectors<K> {
    /// Cases whose encryption must match `result` exactly.
    pub passing: Vec<TestCase<K>>,
    /// Cases whose encryption must fail with an operation error.
    pub failing: Vec<TestCase<K>>,
    /// Cases whose decryption must fail. Always empty for AES-GCM.
    pub decryption_failing: Vec<TestCase<K>>,
}

impl<K> TestVectors<K> {
    pub fn group(&self, group: Group) -> &[TestCase<K>] {
        match group {
            Group::Passing => &self.passing,
            Group::Failing => &self.failing,
            Group::DecryptionFailing => &self.decryption_failing,
        }
    }

    /// Iterates every case with its group, passing first.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &TestCase<K>)> {
        Group::ALL
            .into_iter()
            .flat_map(move |g| self.group(g).iter().map(move |case| (g, case)))
    }

    pub fn len(&self) -> usize {
        self.passing.len() + self.failing.len() + self.decryption_failing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Imports the key of every case. Stops at the first import error.
    pub fn hydrate<P>(&mut self, provider: &P) -> Result<()>
    where
        P: GcmProvider<Key = K> + ?Sized,
    {
        for case in self
            .passing
            .iter_mut()
            .chain(self.failing.iter_mut())
            .chain(self.decryption_failing.iter_mut())
        {
            case.hydrate(provider)?;
        }
        Ok(())
    }
}
