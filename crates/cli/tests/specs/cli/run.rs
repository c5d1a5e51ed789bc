// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pt run` specs

use crate::prelude::*;

#[test]
fn passing_program_labels_every_tool_line() {
    let fakes = FakeToolchain::new().unwrap();
    let (_tmp, dir) = sample_program();

    cli()
        .args(&["run", "--label", "[demo] ", "-d", "@lumi/lumi"])
        .arg_path(&dir)
        .toolchain(&fakes)
        .passes()
        .stdout_lines_with(
            "[demo] yarn ",
            &["[demo] yarn link @lumi/lumi (deploys=0)"],
        )
        .stdout_lines_with(
            "[demo] lumi ",
            &[
                "[demo] lumi env init integrationtesting (deploys=0)",
                "[demo] lumi plan (deploys=0)",
                "[demo] lumi deploy (deploys=0)",
                "[demo] lumi plan (deploys=1)",
                "[demo] lumi deploy (deploys=1)",
                "[demo] lumi destroy --yes (deploys=2)",
                "[demo] lumi env rm --yes integrationtesting (deploys=2)",
            ],
        )
        .stdout_has("[demo] **** Invoke '")
        .stdout_has(&format!("ok {} (9 steps, 0 edits)", dir.display()));
}

#[test]
fn config_and_environment_flags_reach_lumi() {
    let fakes = FakeToolchain::new().unwrap();
    let (_tmp, dir) = sample_program();

    cli()
        .args(&[
            "run",
            "--label",
            "[cfg] ",
            "--environment",
            "ci",
            "--config",
            "aws:config:region=us-west-2",
        ])
        .arg_path(&dir)
        .toolchain(&fakes)
        .passes()
        .stdout_has("[cfg] lumi env init ci (deploys=0)")
        .stdout_has("[cfg] lumi config aws:config:region us-west-2 (deploys=0)")
        .stdout_has("[cfg] lumi env rm --yes ci");
}

#[test]
fn edits_deploy_atop_previous_state() {
    let fakes = FakeToolchain::new().unwrap();
    let (tmp, dir) = sample_program();
    let edit = tmp.path().join("edit");
    write_program(&edit, &[("index.ts", "export const changed = 1;\n")]).unwrap();

    cli()
        .args(&["run", "--label", "[edit] "])
        .arg_path(&dir)
        .args(&["--edit"])
        .arg_path(&edit)
        .toolchain(&fakes)
        .passes()
        .stdout_has("[edit] lumi deploy (deploys=2)")
        .stdout_has("[edit] lumi destroy --yes (deploys=3)")
        .stdout_has("(11 steps, 1 edits)");
}

#[test]
fn failing_deploy_reports_the_step_and_still_tears_down() {
    let fakes = FakeToolchain::failing("lumi deploy").unwrap();
    let (_tmp, dir) = sample_program();

    cli()
        .args(&["run", "--label", "[bad] "])
        .arg_path(&dir)
        .toolchain(&fakes)
        .fails()
        .code(1)
        .stdout_has("[bad] lumi destroy --yes")
        .stdout_has(&format!("FAILED {}", dir.display()))
        .stdout_lacks("[bad] lumi plan (deploys=1)")
        .stderr_has("[bad] lumi: failing on purpose")
        .stderr_has("Error: step 2 of 2: expected to successfully invoke '")
        .stderr_has("exit code 1");
}

#[test]
fn missing_lumi_override_fails_before_running_anything() {
    let fakes = FakeToolchain::new().unwrap();
    let (tmp, dir) = sample_program();
    let missing = tmp.path().join("no-such-lumi");

    cli()
        .args(&["run"])
        .arg_path(&dir)
        .toolchain(&fakes)
        .args(&["--lumi-bin"])
        .arg_path(&missing)
        .fails()
        .code(1)
        .stderr_has("lumi override")
        .stdout_lacks("**** Invoke");
    assert!(fakes.calls().unwrap().is_empty());
}

#[test]
fn options_file_supplies_dependencies() {
    let fakes = FakeToolchain::new().unwrap();
    let (tmp, _dir) = sample_program();
    let file = tmp.path().join("options.toml");
    std::fs::write(
        &file,
        "dir = \"sample\"\nlabel = \"[file] \"\ndependencies = [\"@lumi/aws\"]\n",
    )
    .unwrap();

    cli()
        .args(&["run", "--options"])
        .arg_path(&file)
        .toolchain(&fakes)
        .passes()
        .stdout_has("[file] yarn link @lumi/aws (deploys=0)");
}

#[test]
fn relative_lumi_bin_is_taken_from_the_invoking_directory() {
    let fakes = FakeToolchain::new().unwrap();
    let (_tmp, dir) = sample_program();
    let fakes_dir = fakes.lumi().parent().unwrap().to_path_buf();

    cli()
        .pwd(&fakes_dir)
        .args(&["run", "--label", "[rel] ", "--lumi-bin", "./lumi"])
        .arg_path(&dir)
        .toolchain(&fakes)
        .passes()
        .stdout_has("[rel] lumi env init integrationtesting (deploys=0)")
        .stdout_has("(8 steps, 0 edits)");
}
