use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

fn stdout_of(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("fieldpath").args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn expand_arguments_as_lines() {
    let stdout = stdout_of(&["expand", "a.b.(c,d),h.i"]);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    a.b.c
    a.b.d
    h.i
    ");
}

#[test]
fn expand_several_arguments_in_order() {
    let stdout = stdout_of(&["expand", "x.(a,b)", "y"]);
    assert_eq!(stdout, "x.a\nx.b\ny\n");
}

#[test]
fn expand_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("fieldpath");
    cmd.arg("expand")
        .write_stdin("a.(b,c).d\n\nj.(k,l)\n");

    cmd.assert()
        .success()
        .stdout(predicate::eq("a.b.d\na.c.d\nj.k\nj.l\n"));
}

#[test]
fn expand_as_json() {
    let stdout = stdout_of(&["expand", "--format", "json", "a.(b,c)"]);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    [
      "a.b",
      "a.c"
    ]
    "#);
}

#[test]
fn expand_with_params_as_json() {
    let stdout = stdout_of(&[
        "expand",
        "--with-params",
        "--format",
        "json",
        "a.b{c=d;e=f}.(f,g)",
    ]);
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records[0]["path"], "a.b{c=d;e=f}.f");
    assert_eq!(records[0]["field"], "a.b.f");
    assert_eq!(records[0]["params"][1]["key"], "e");
    assert_eq!(records[1]["path"], "a.b{c=d;e=f}.g");
}

#[test]
fn expand_with_custom_markers() {
    let stdout = stdout_of(&[
        "expand",
        "--open",
        "[",
        "--close",
        "]",
        "--delimiter",
        "|",
        "a.[b|c]|f(x)",
    ]);
    assert_eq!(stdout, "a.b\na.c\nf(x)\n");
}

#[test]
fn expand_with_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[markers]\nopen = \"<\"\nclose = \">\"\n\n[output]\nformat = \"yaml\"").unwrap();

    let mut cmd = cargo_bin_cmd!("fieldpath");
    cmd.arg("expand")
        .arg("--config")
        .arg(file.path())
        .arg("a.<b,c>");

    cmd.assert()
        .success()
        .stdout(predicate::eq("- a.b\n- a.c\n"));
}

#[test]
fn rejects_overlapping_markers() {
    let mut cmd = cargo_bin_cmd!("fieldpath");
    cmd.args(["expand", "--delimiter", "(", "a.(b,c)"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid markers"));
}

#[test]
fn reports_expansion_limit() {
    let mut cmd = cargo_bin_cmd!("fieldpath");
    cmd.args(["expand", "--max-len", "10", "a.(b,c,d,e,f,g)"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expansion exceeded 10 bytes"));
}

#[test]
fn rejects_max_len_beyond_config_range() {
    let too_big = u64::MAX.to_string();
    let mut cmd = cargo_bin_cmd!("fieldpath");
    cmd.args(["expand", "--max-len", too_big.as_str(), "a.(b,c)"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--max-len"));
}

#[test]
fn params_lines() {
    let stdout = stdout_of(&["params", "site.id{first=param;another=try}", "site.name"]);
    assert_eq!(stdout, "site.id\tfirst=param\tanother=try\nsite.name\n");
}

#[test]
fn params_decodes_values() {
    let stdout = stdout_of(&["params", "--format", "json", "site.id{one=a+b%2Cc}"]);
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records[0]["field"], "site.id");
    assert_eq!(records[0]["params"][0]["value"], "a b,c");
}

#[test]
fn params_raw_values_from_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[output]\ndecode_params = false").unwrap();

    let stdout = stdout_of(&[
        "params",
        "--config",
        file.path().to_str().unwrap(),
        "--format",
        "json",
        "site.id{one=a+b%2Cc}",
    ]);
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records[0]["field"], "site.id");
    assert_eq!(records[0]["params"][0]["value"], "a+b%2Cc");
}

#[test]
fn subcommand_required() {
    let mut cmd = cargo_bin_cmd!("fieldpath");
    cmd.assert().failure();
}
