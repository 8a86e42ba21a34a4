use std::io::Write;

use gcm_vectors::{Group, TestCase, TestVectors};
use serde::Serialize;

use crate::CliError;
use crate::args::Format;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CaseDump<'a> {
    group: &'static str,
    name: &'a str,
    key_material: String,
    algorithm: AlgorithmDump,
    plaintext: String,
    result: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AlgorithmDump {
    name: &'static str,
    iv: String,
    // absent and empty additional data are different cases
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_data: Option<String>,
    tag_length: u16,
}

impl<'a> CaseDump<'a> {
    fn new<K>(group: Group, case: &'a TestCase<K>) -> Self {
        Self {
            group: group.as_str(),
            name: &case.name,
            key_material: hex::encode(case.key_material),
            algorithm: AlgorithmDump {
                name: case.algorithm.name,
                iv: hex::encode(case.algorithm.iv),
                additional_data: case.algorithm.additional_data.map(hex::encode),
                tag_length: case.algorithm.tag_length,
            },
            plaintext: hex::encode(case.plaintext),
            result: hex::encode(&case.result),
        }
    }
}

/// Writes one `group<TAB>name` line per case of `groups`.
pub fn list<W: Write, K>(
    mut out: W,
    vectors: &TestVectors<K>,
    groups: &[Group],
) -> Result<(), CliError> {
    for &group in groups {
        for case in vectors.group(group) {
            writeln!(out, "{group}\t{}", case.name)?;
        }
    }
    Ok(())
}

/// Writes the cases of `groups` to `out`.
pub fn write<W: Write, K>(
    mut out: W,
    vectors: &TestVectors<K>,
    groups: &[Group],
    format: Format,
) -> Result<(), CliError> {
    let cases: Vec<CaseDump<'_>> = groups
        .iter()
        .flat_map(|&g| vectors.group(g).iter().map(move |case| CaseDump::new(g, case)))
        .collect();

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &cases)?;
            writeln!(out)?;
        }
        Format::Hex => {
            for case in &cases {
                writeln!(out, "[{}] {}", case.group, case.name)?;
                writeln!(out, "  key        = {}", case.key_material)?;
                writeln!(out, "  iv         = {}", case.algorithm.iv)?;
                match &case.algorithm.additional_data {
                    Some(aad) => writeln!(out, "  aad        = {aad}")?,
                    None => writeln!(out, "  aad        = (absent)")?,
                }
                writeln!(out, "  tag_length = {}", case.algorithm.tag_length)?;
                writeln!(out, "  plaintext  = {}", case.plaintext)?;
                writeln!(out, "  result     = {}", case.result)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_omits_absent_additional_data() -> Result<(), CliError> {
        let vectors = gcm_vectors::test_vectors::<()>();
        let mut buf = Vec::new();
        write(&mut buf, &vectors, &[Group::Passing], Format::Json)?;

        let value: serde_json::Value = serde_json::from_slice(&buf)?;
        let cases = value.as_array().map(Vec::len);
        assert_eq!(cases, Some(42));
        assert_eq!(value[0]["name"], "AES-GCM 128-bit key, 32-bit tag");
        assert!(value[0]["algorithm"].get("additionalData").is_some());
        assert!(value[1]["algorithm"].get("additionalData").is_none());
        assert_eq!(value[1]["algorithm"]["tagLength"], 32);
        Ok(())
    }

    #[test]
    fn hex_lists_every_selected_case() -> Result<(), CliError> {
        let vectors = gcm_vectors::test_vectors::<()>();
        let mut buf = Vec::new();
        write(&mut buf, &vectors, &[Group::Failing], Format::Hex)?;

        let text = String::from_utf8_lossy(&buf);
        assert_eq!(text.matches("[failing] ").count(), 15);
        assert!(text.contains("[failing] AES-GCM 192-bit key, illegal tag length 95-bits"));
        assert!(!text.contains("(absent)"));
        Ok(())
    }

    #[test]
    fn list_prints_group_and_name_per_line() -> Result<(), CliError> {
        let vectors = gcm_vectors::test_vectors::<()>();
        let mut buf = Vec::new();
        list(&mut buf, &vectors, &Group::ALL)?;

        let text = String::from_utf8_lossy(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 57);
        assert_eq!(lines[0], "passing\tAES-GCM 128-bit key, 32-bit tag");
        assert_eq!(lines[56], "failing\tAES-GCM 256-bit key, illegal tag length 129-bits");
        Ok(())
    }
}
