//! Golden tests for glossa
//!
//! These tests verify that command outputs keep a stable shape.
//! Golden tests ensure:
//! - Output format stability across versions
//! - Consistent normalization of every accepted document shape
//! - No unexpected regressions in output structure

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the main fixture document
fn sample_lexicon() -> PathBuf {
    fixtures_dir().join("lexicon.json")
}

/// Create a command for running the glossa binary against the sample lexicon
fn glossa_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("glossa"));
    cmd.env_remove("GLOSSA_FORMAT")
        .env_remove("RUST_LOG")
        .arg("--data")
        .arg(sample_lexicon());
    cmd
}

/// Parse JSONL output into a vector of JSON values
fn parse_jsonl(output: &str) -> Vec<Value> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect()
}

/// Normalize a result item by removing unstable fields (load time, etc.)
fn normalize_item(mut item: Value) -> Value {
    if let Some(data) = item.get_mut("data").and_then(|d| d.as_object_mut()) {
        data.remove("loaded_at");
        data.remove("path");
    }
    item
}

fn run_jsonl(args: &[&str]) -> Vec<Value> {
    let output = glossa_cmd().args(args).output().expect("failed to execute");
    assert!(output.status.success(), "glossa {:?} failed", args);
    parse_jsonl(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Entry Tests ====================

    #[test]
    fn golden_entry_structure() {
        let items = run_jsonl(&["list"]);
        assert_eq!(items.len(), 5, "Expected 5 entries");

        for item in &items {
            assert_eq!(item.get("kind").and_then(|v| v.as_str()), Some("entry"));
            assert!(item.get("id").is_some(), "id required for entries");
            assert!(item.get("title").is_some(), "title required for entries");
            assert!(item.get("link").is_some(), "link required for entries");

            let meta = item.get("meta").expect("meta required");
            assert!(meta.get("sort_key").is_some(), "entries carry a sort key");
            assert!(
                meta.get("truncated").is_some(),
                "truncated should be present"
            );
        }
    }

    #[test]
    fn golden_entry_payload() {
        let items = run_jsonl(&["show", "32a2"]);

        assert_eq!(
            items[0]["data"],
            json!({
                "id": "32a2",
                "term": "Covenant Council",
                "section": "II",
                "partOfSpeech": "noun",
                "shortDefinition": "The body that keeps the covenant.",
                "longDefinition": "",
                "category": "",
                "crossRefs": ["6"],
                "order": 0.0
            })
        );
        assert_eq!(
            items[0]["meta"]["sort_key"],
            "000032|999999|a00000|000002"
        );
    }

    // ==================== Search Tests ====================

    #[test]
    fn golden_search_hits() {
        let items = run_jsonl(&["search", "covenant"]);

        let got: Vec<(&str, i64)> = items
            .iter()
            .map(|v| (v["id"].as_str().unwrap(), v["score"].as_i64().unwrap()))
            .collect();
        assert_eq!(got, vec![("32a2", 25)]);
    }

    #[test]
    fn golden_search_empty_query() {
        let items = run_jsonl(&["search", "   "]);
        assert!(items.is_empty(), "blank query ranks nothing");
    }

    // ==================== Document Tests ====================

    #[test]
    fn golden_info_structure() {
        let items = run_jsonl(&["info"]);
        assert_eq!(items.len(), 1);

        let item = normalize_item(items[0].clone());
        let data = item.get("data").expect("data required");
        assert_eq!(data["entries"], 5);
        assert_eq!(data["dropped"], 0);
        assert_eq!(data["duplicates"], json!([]));
        assert_eq!(data["pages"], json!(["preface", "rules"]));
        assert_eq!(data["meta"]["title"], "Soulaan Lexicon");
        assert_eq!(data["meta"]["year"], "2025");
        assert_eq!(
            data["sections"],
            json!([
                {"id": "I", "title": "Foundations"},
                {"id": "II", "title": "Community"}
            ])
        );
        assert!(data.get("loaded_at").is_none());
        assert!(item.get("errors").is_none(), "clean document has no warnings");
    }

    #[test]
    fn golden_fingerprint_is_stable() {
        let first = run_jsonl(&["info"]);
        let second = run_jsonl(&["info"]);
        assert_eq!(
            first[0]["data"]["fingerprint"],
            second[0]["data"]["fingerprint"]
        );
    }

    // ==================== Format Tests ====================

    #[test]
    fn golden_json_format_is_array() {
        let output = glossa_cmd()
            .args(["--format", "json", "facets"])
            .output()
            .expect("failed to execute");
        let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");

        let names: Vec<_> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|v| v["id"].as_str())
            .collect();
        assert_eq!(names, vec!["sections", "tags", "letters"]);
    }

    #[test]
    fn golden_markdown_entry() {
        let output = glossa_cmd()
            .args(["--format", "md", "show", "6c"])
            .output()
            .expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("## Entries (1)"));
        assert!(stdout.contains("### §6c. Justice"));
        assert!(stdout.contains("Fairness under law."));
        assert!(stdout.contains("(#6c)"));
    }

    #[test]
    fn golden_raw_page() {
        let output = glossa_cmd()
            .args(["--format", "raw", "page", "rules"])
            .output()
            .expect("failed to execute");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "Every term carries its plain meaning unless defined here.\n"
        );
    }

    #[test]
    fn golden_pretty_jsonl() {
        let output = glossa_cmd()
            .args(["--pretty", "sort-key", "6"])
            .output()
            .expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("\n  \"kind\": \"sort_key\""));
        let value: Value = serde_json::from_str(&stdout).expect("single pretty object");
        assert_eq!(value["meta"]["sort_key"], "000006|000000|000000");
    }
}
