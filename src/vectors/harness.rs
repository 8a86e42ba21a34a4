//! Runs [`TestVectors`] against a [`GcmProvider`] and collects per-case outcomes.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::vectors::case::{Group, TestCase, TestVectors};
use crate::vectors::error::{Error, Result};
use crate::vectors::provider::GcmProvider;

/// Options for [`run`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Also decrypt each `result`. Passing cases must round-trip to the plaintext;
    /// failing cases must be rejected for their tag length on decryption too.
    pub check_decrypt: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            check_decrypt: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub group: Group,
    pub outcome: Outcome,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

/// Result of a [`run`]. `cases` keeps the order of [`TestVectors::iter`].
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseReport>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.passed())
    }
}

/// Runs every case of `vectors` against `provider`, in parallel.
///
/// Cases must already be [hydrated](TestVectors::hydrate). An unhydrated case is
/// reported as failed rather than aborting the run.
pub fn run<P>(provider: &P, vectors: &TestVectors<P::Key>, options: &RunOptions) -> Report
where
    P: GcmProvider + Sync,
    P::Key: Sync,
{
    let work: Vec<(Group, &TestCase<P::Key>)> = vectors.iter().collect();

    let cases: Vec<CaseReport> = work
        .par_iter()
        .map(|&(group, case)| {
            let outcome = match check(provider, group, case, options) {
                Ok(()) => {
                    debug!(case = %case.name, %group, "passed");
                    Outcome::Passed
                }
                Err(reason) => {
                    warn!(case = %case.name, %group, %reason, "failed");
                    Outcome::Failed { reason }
                }
            };
            CaseReport {
                name: case.name.clone(),
                group,
                outcome,
            }
        })
        .collect();

    let passed = cases.iter().filter(|c| c.passed()).count();
    let report = Report {
        total: cases.len(),
        passed,
        failed: cases.len() - passed,
        cases,
    };

    info!(
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "AES-GCM vector run complete"
    );
    report
}

/// Checks one case. `Err` carries a human-readable reason.
fn check<P: GcmProvider>(
    provider: &P,
    group: Group,
    case: &TestCase<P::Key>,
    options: &RunOptions,
) -> std::result::Result<(), String> {
    let key = case.key().map_err(|e| e.to_string())?;
    let params = &case.algorithm;

    match group {
        Group::Passing => {
            let sealed = provider
                .encrypt(params, key, case.plaintext)
                .map_err(|e| format!("encrypt failed: {e}"))?;
            if sealed != case.result {
                return Err(mismatch("encrypt", &case.result, &sealed));
            }

            if options.check_decrypt {
                let opened = provider
                    .decrypt(params, key, &case.result)
                    .map_err(|e| format!("decrypt failed: {e}"))?;
                if opened != case.plaintext {
                    return Err(mismatch("decrypt", case.plaintext, &opened));
                }
            }
            Ok(())
        }
        Group::Failing => {
            expect_tag_length_error("encrypt", provider.encrypt(params, key, case.plaintext))?;
            if options.check_decrypt {
                expect_tag_length_error("decrypt", provider.decrypt(params, key, &case.result))?;
            }
            Ok(())
        }
        Group::DecryptionFailing => match provider.decrypt(params, key, &case.result) {
            Ok(_) => Err("decrypt succeeded, expected an error".to_string()),
            Err(e @ Error::KeyNotImported { .. }) => Err(e.to_string()),
            Err(_) => Ok(()),
        },
    }
}

fn expect_tag_length_error(op: &str, result: Result<Vec<u8>>) -> std::result::Result<(), String> {
    match result {
        Err(Error::InvalidTagLength { .. }) => Ok(()),
        Err(e) => Err(format!("{op} failed with {e}, expected an illegal tag length error")),
        Ok(_) => Err(format!("{op} succeeded, expected an illegal tag length error")),
    }
}

fn mismatch(op: &str, expected: &[u8], actual: &[u8]) -> String {
    if expected.len() != actual.len() {
        return format!(
            "{op} output length {} does not match expected {}",
            actual.len(),
            expected.len()
        );
    }
    let first = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .unwrap_or(0);
    format!("{op} output differs from expected at byte {first}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::builder::test_vectors;
    use crate::vectors::case::{AesGcmParams, KeySize, tag_byte_len};

    /// Replays the expected bytes of the vectors without doing any cryptography.
    struct Replay {
        vectors: TestVectors<()>,
    }

    impl Replay {
        fn new() -> Self {
            Self {
                vectors: test_vectors(),
            }
        }

        fn lookup(
            &self,
            key: KeySize,
            params: &AesGcmParams,
            input: &[u8],
            decrypt: bool,
        ) -> Result<Vec<u8>> {
            tag_byte_len(params.tag_length)?;
            self.vectors
                .passing
                .iter()
                .find(|c| {
                    c.key_size == key
                        && c.algorithm == *params
                        && if decrypt {
                            c.result == input
                        } else {
                            c.plaintext == input
                        }
                })
                .map(|c| {
                    if decrypt {
                        c.plaintext.to_vec()
                    } else {
                        c.result.clone()
                    }
                })
                .ok_or(Error::AuthFailed)
        }
    }

    impl GcmProvider for Replay {
        type Key = KeySize;

        fn import_key(&self, raw: &[u8]) -> Result<KeySize> {
            KeySize::ALL
                .into_iter()
                .find(|k| k.byte_len() == raw.len())
                .ok_or(Error::InvalidKeyLength { len: raw.len() })
        }

        fn encrypt(&self, params: &AesGcmParams, key: &KeySize, plaintext: &[u8]) -> Result<Vec<u8>> {
            self.lookup(*key, params, plaintext, false)
        }

        fn decrypt(&self, params: &AesGcmParams, key: &KeySize, data: &[u8]) -> Result<Vec<u8>> {
            self.lookup(*key, params, data, true)
        }
    }

    /// Accepts every tag length and returns its input unchanged.
    struct Permissive;

    impl GcmProvider for Permissive {
        type Key = ();

        fn import_key(&self, _raw: &[u8]) -> Result<()> {
            Ok(())
        }

        fn encrypt(&self, _params: &AesGcmParams, _key: &(), plaintext: &[u8]) -> Result<Vec<u8>> {
            Ok(plaintext.to_vec())
        }

        fn decrypt(&self, _params: &AesGcmParams, _key: &(), data: &[u8]) -> Result<Vec<u8>> {
            Ok(data.to_vec())
        }
    }

    /// Decrypt fails with `AuthFailed` on empty input, reports a missing key for
    /// `b"orphan"`, and succeeds otherwise.
    struct Scripted;

    impl GcmProvider for Scripted {
        type Key = ();

        fn import_key(&self, _raw: &[u8]) -> Result<()> {
            Ok(())
        }

        fn encrypt(&self, _params: &AesGcmParams, _key: &(), plaintext: &[u8]) -> Result<Vec<u8>> {
            Ok(plaintext.to_vec())
        }

        fn decrypt(&self, _params: &AesGcmParams, _key: &(), data: &[u8]) -> Result<Vec<u8>> {
            match data {
                [] => Err(Error::AuthFailed),
                b"orphan" => Err(Error::KeyNotImported {
                    name: "orphan".to_string(),
                }),
                _ => Ok(data.to_vec()),
            }
        }
    }

    #[test]
    fn conforming_provider_passes_everything() -> Result<()> {
        let provider = Replay::new();
        let mut vectors = test_vectors();
        vectors.hydrate(&provider)?;

        let report = run(&provider, &vectors, &RunOptions::default());
        assert_eq!(report.total, 57);
        assert!(report.all_passed(), "{:?}", report.failures().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn report_keeps_case_order() -> Result<()> {
        let provider = Replay::new();
        let mut vectors = test_vectors();
        vectors.hydrate(&provider)?;

        let report = run(&provider, &vectors, &RunOptions::default());
        let expected: Vec<&str> = vectors.iter().map(|(_, c)| c.name.as_str()).collect();
        let actual: Vec<&str> = report.cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(actual, expected);
        assert_eq!(report.cases[42].group, Group::Failing);
        Ok(())
    }

    #[test]
    fn permissive_provider_fails_every_case() -> Result<()> {
        let mut vectors = test_vectors();
        vectors.hydrate(&Permissive)?;

        let report = run(&Permissive, &vectors, &RunOptions::default());
        assert_eq!(report.failed, 57);
        assert!(
            report
                .failures()
                .filter(|c| c.group == Group::Failing)
                .all(|c| matches!(&c.outcome, Outcome::Failed { reason } if reason.contains("succeeded")))
        );
        Ok(())
    }

    #[test]
    fn unhydrated_cases_fail_without_panicking() {
        let vectors = test_vectors();
        let report = run(&Permissive, &vectors, &RunOptions { check_decrypt: false });
        assert_eq!(report.failed, report.total);
        assert!(
            report
                .failures()
                .all(|c| matches!(&c.outcome, Outcome::Failed { reason } if reason.contains("no imported key")))
        );
    }

    #[test]
    fn decryption_failing_requires_a_real_decrypt_error() -> Result<()> {
        let mut vectors: TestVectors<()> = test_vectors();

        let mut rejected = vectors.passing[0].clone();
        rejected.result.clear();
        let accepted = vectors.passing[1].clone();
        let mut orphaned = vectors.passing[2].clone();
        orphaned.result = b"orphan".to_vec();

        vectors.passing.clear();
        vectors.failing.clear();
        vectors.decryption_failing = vec![rejected, accepted, orphaned];
        vectors.hydrate(&Scripted)?;

        let report = run(&Scripted, &vectors, &RunOptions::default());
        assert_eq!(report.total, 3);
        assert!(report.cases.iter().all(|c| c.group == Group::DecryptionFailing));

        assert_eq!(report.cases[0].outcome, Outcome::Passed);
        assert_eq!(
            report.cases[1].outcome,
            Outcome::Failed {
                reason: "decrypt succeeded, expected an error".to_string()
            }
        );
        assert!(matches!(
            &report.cases[2].outcome,
            Outcome::Failed { reason } if reason.contains("no imported key")
        ));
        assert_eq!((report.passed, report.failed), (1, 2));
        Ok(())
    }

    #[test]
    fn permissive_provider_fails_decryption_failing_cases() -> Result<()> {
        let mut vectors: TestVectors<()> = test_vectors();
        vectors.decryption_failing = vectors.passing.drain(..2).collect();
        vectors.failing.clear();
        vectors.passing.clear();
        vectors.hydrate(&Permissive)?;

        let report = run(&Permissive, &vectors, &RunOptions::default());
        assert_eq!(report.failed, 2);
        assert!(report.failures().all(|c| c.group == Group::DecryptionFailing
            && matches!(&c.outcome, Outcome::Failed { reason } if reason.contains("decrypt succeeded"))));
        Ok(())
    }
}
