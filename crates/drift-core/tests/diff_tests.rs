//! Tests for the structural differ against decoded documents

use drift_core::{ConfigTree, DiffResult, Format, diff};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn toml(source: &str) -> ConfigTree {
    Format::Toml.decode(source.as_bytes()).expect("valid TOML")
}

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case::modified_values(
    "param1 = \"value1\"\nparam2 = 42\n",
    "param1 = \"different_value\"\nparam2 = 100\n",
    &[], &[], &["param1", "param2"]
)]
#[case::added_key(
    "param1 = \"value1\"\n",
    "param1 = \"value1\"\nparam2 = \"new_value\"\n",
    &["param2"], &[], &[]
)]
#[case::removed_key(
    "param1 = \"value1\"\nparam2 = \"value2\"\n",
    "param1 = \"value1\"\n",
    &[], &["param2"], &[]
)]
#[case::nested_added_key(
    "[parent]\nchild1 = \"value1\"\n",
    "[parent]\nchild1 = \"value1\"\nchild2 = \"new_value\"\n",
    &["parent.child2"], &[], &[]
)]
#[case::type_change(
    "timeout = \"5s\"\n",
    "timeout = 5\n",
    &[], &[], &["timeout"]
)]
#[case::table_replaced_by_scalar(
    "[statesync]\nenable = false\n",
    "statesync = false\n",
    &[], &[], &["statesync"]
)]
fn test_diff_cases(
    #[case] existing: &str,
    #[case] canonical: &str,
    #[case] added: &[&str],
    #[case] removed: &[&str],
    #[case] modified: &[&str],
) {
    let result = diff(&toml(existing), &toml(canonical));
    assert_eq!(
        result,
        DiffResult {
            added: paths(added),
            removed: paths(removed),
            modified: paths(modified),
        }
    );
}

#[test]
fn test_mixed_drift_across_sections() {
    let existing = toml(
        r#"
moniker = "validator-1"
fast_sync = true

[rpc]
laddr = "tcp://127.0.0.1:26657"
grpc_laddr = ""

[p2p]
seeds = ["a@1.2.3.4:26656"]
"#,
    );
    let canonical = toml(
        r#"
moniker = "validator-1"

[rpc]
laddr = "tcp://127.0.0.1:26657"
cors_allowed_origins = []

[p2p]
seeds = []

[statesync]
enable = false
"#,
    );

    let result = diff(&existing, &canonical);
    assert_eq!(result.added, paths(&["rpc.cors_allowed_origins", "statesync"]));
    assert_eq!(result.removed, paths(&["fast_sync", "rpc.grpc_laddr"]));
    assert_eq!(result.modified, paths(&["p2p.seeds"]));
}

#[test]
fn test_key_order_does_not_matter() {
    let canonical = toml("[a]\nx = 1\ny = 2\n\n[b]\nz = 3\n");
    let forward = toml("[a]\nx = 9\n\n[b]\nq = 0\n");
    let shuffled = toml("[b]\nq = 0\n\n[a]\nx = 9\n");

    assert_eq!(diff(&forward, &canonical), diff(&shuffled, &canonical));
}

#[test]
fn test_dotted_keys_and_tables_are_equivalent() {
    let existing = toml("a.b = 1\n");
    let canonical = toml("[a]\nb = 1\n");
    assert!(diff(&existing, &canonical).is_empty());
}

#[test]
fn test_quoted_dotted_key_stays_distinct_from_table_path() {
    let existing = toml("[a]\nb = 2\n");
    let canonical = toml("\"a.b\" = 3\n\n[a]\nb = 1\n");

    assert_eq!(
        diff(&existing, &canonical),
        DiffResult {
            added: paths(&["\"a.b\""]),
            removed: vec![],
            modified: paths(&["a.b"]),
        }
    );
}

#[test]
fn test_same_values_across_formats() {
    let from_json = Format::Json
        .decode(br#"{"api": {"enable": true, "port": 1317}}"#)
        .unwrap();
    let from_yaml = Format::Yaml.decode(b"api:\n  enable: true\n  port: 1317\n").unwrap();
    let from_toml = toml("[api]\nenable = true\nport = 1317\n");

    assert!(diff(&from_json, &from_toml).is_empty());
    assert!(diff(&from_yaml, &from_toml).is_empty());
}
