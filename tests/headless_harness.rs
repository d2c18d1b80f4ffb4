#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `eos` as a compiled binary via
//! [`std::process::Command`]. It validates the contract of headless mode from
//! the outside, as a user or another CLI tool would observe it.
//!
//! - **Simple search**: `--query` with and without `--field`.
//! - **Advanced search**: `--name`, `--company`, `--location` combined.
//! - **Output formats**: `table` and `jsonl`, the latter parsed back with
//!   `serde_json`.
//! - **Exit codes**: an empty result exits 0; bad flags and unreadable data
//!   exit non-zero.
//!
//! Every run points `XDG_CONFIG_HOME` at a temp directory so the user's own
//! config is never read or created.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (see the `eos-tui` unit tests, which use `TestBackend`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    config_home: TempDir,
    data: NamedTempFile,
}

impl Harness {
    fn new() -> Self {
        Self {
            config_home: tempfile::tempdir().expect("temp config dir"),
            data: write_temp_json(ROSTER_JSON),
        }
    }

    fn eos(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_eos"));
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .arg("--headless")
            .arg("--data")
            .arg(self.data.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.eos().args(args).output().expect("spawn eos")
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("utf-8 stdout")
}

fn jsonl_ids(out: &Output) -> Vec<String> {
    stdout(out)
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
            v["NIK"].as_str().expect("NIK is a string").to_string()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Simple search
// ---------------------------------------------------------------------------

#[test]
fn query_defaults_to_name_field() {
    let h = Harness::new();
    let out = h.run(&["--query", "fajar", "--format", "jsonl"]);
    assert!(out.status.success());
    assert_eq!(jsonl_ids(&out), ["91150005"]);
}

#[test]
fn location_query_is_exact() {
    let h = Harness::new();
    let out = h.run(&["--field", "location", "--query", "bandung", "--format", "jsonl"]);
    assert!(out.status.success());
    assert_eq!(jsonl_ids(&out), ["91150001", "91150005"]);

    let out = h.run(&["--field", "location", "--query", "BAND", "--format", "jsonl"]);
    assert!(out.status.success());
    assert!(jsonl_ids(&out).is_empty());
}

// ---------------------------------------------------------------------------
// Advanced search
// ---------------------------------------------------------------------------

#[test]
fn advanced_flags_combine() {
    let h = Harness::new();
    let out = h.run(&[
        "--company",
        "infomedia",
        "--location",
        " Jakarta Selatan ",
        "--format",
        "jsonl",
    ]);
    assert!(out.status.success());
    assert_eq!(jsonl_ids(&out), ["91150002"]);
}

#[test]
fn no_criteria_prints_the_whole_roster_in_order() {
    let h = Harness::new();
    let out = h.run(&["--format", "jsonl"]);
    assert!(out.status.success());
    assert_eq!(jsonl_ids(&out), ROSTER_IDS);
}

// ---------------------------------------------------------------------------
// Table output
// ---------------------------------------------------------------------------

#[test]
fn table_output_has_header_and_rows() {
    let h = Harness::new();
    let out = h.run(&["--field", "company", "--query", "telkom"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for header in ["NIK", "NAMA EOS", "NO HP", "CC/AREA", "NAMA CC", "LOKASI SITE"] {
        assert!(lines[0].contains(header), "missing header {header}");
    }
    assert!(lines[1].starts_with("91150001"));
    assert!(lines[2].starts_with("91150003"));
}

#[test]
fn empty_result_prints_message_and_exits_zero() {
    let h = Harness::new();
    let out = h.run(&["--query", "nobody"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(eos_core::NO_MATCHES_MESSAGE));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn query_conflicts_with_advanced_flags() {
    let h = Harness::new();
    let out = h.run(&["--query", "a", "--name", "b"]);
    assert!(!out.status.success());
}

#[test]
fn unknown_field_is_rejected() {
    let h = Harness::new();
    let out = h.run(&["--field", "phone", "--query", "0812"]);
    assert!(!out.status.success());
}

#[test]
fn unreadable_data_exits_non_zero() {
    let h = Harness::new();
    let dir = tempfile::tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_eos"))
        .env("XDG_CONFIG_HOME", h.config_home.path())
        .args(["--headless", "--data"])
        .arg(dir.path().join("missing.json"))
        .output()
        .expect("spawn eos");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to load engineer roster"));
}

#[test]
fn config_file_is_created_on_first_run() {
    let h = Harness::new();
    let out = h.run(&["--query", "ari"]);
    assert!(out.status.success());
    assert!(h.config_home.path().join("eos").join("config.toml").exists());
}
