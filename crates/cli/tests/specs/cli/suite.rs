// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pt suite` specs

use crate::prelude::*;

fn suite(programs: &[&str]) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let mut manifest = String::from("[defaults]\nenvironment = \"suite\"\n");
    for name in programs {
        write_program(&tmp.path().join(name), &[("index.ts", "export {}\n")]).unwrap();
        manifest.push_str(&format!(
            "\n[[program]]\ndir = \"{name}\"\nlabel = \"[{name}] \"\n"
        ));
    }
    let path = tmp.path().join("suite.toml");
    std::fs::write(&path, manifest).unwrap();
    (tmp, path)
}

#[test]
fn every_program_runs_and_is_summarized() {
    let fakes = FakeToolchain::new().unwrap();
    let (tmp, manifest) = suite(&["alpha", "beta"]);

    cli()
        .args(&["suite"])
        .arg_path(&manifest)
        .toolchain(&fakes)
        .passes()
        .stdout_has("[alpha] lumi env init suite")
        .stdout_has("[beta] lumi env init suite")
        .stdout_has(&format!("ok {}", tmp.path().join("alpha").display()))
        .stdout_has(&format!("ok {}", tmp.path().join("beta").display()))
        .stdout_has("2 passed; 0 failed");
}

#[test]
fn failing_program_fails_the_suite() {
    let fakes = FakeToolchain::failing("lumijs --verbose").unwrap();
    let (_tmp, manifest) = suite(&["alpha", "beta"]);

    cli()
        .args(&["suite"])
        .arg_path(&manifest)
        .toolchain(&fakes)
        .fails()
        .code(1)
        .stdout_has("FAILED ")
        .stdout_has("0 passed; 2 failed");
}

#[test]
fn filter_selects_programs() {
    let fakes = FakeToolchain::new().unwrap();
    let (_tmp, manifest) = suite(&["alpha", "beta"]);

    cli()
        .args(&["suite", "--filter", "beta"])
        .arg_path(&manifest)
        .toolchain(&fakes)
        .passes()
        .stdout_lacks("[alpha]")
        .stdout_has("1 passed; 0 failed");
}

#[test]
fn unknown_manifest_key_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("suite.toml");
    std::fs::write(&manifest, "[[program]]\ndirectory = \"x\"\n").unwrap();

    cli()
        .args(&["suite"])
        .arg_path(&manifest)
        .fails()
        .stderr_has("failed to parse");
}
