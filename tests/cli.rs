use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn wordlist() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in ["cat", "bat", "hat", "cot", "dog", "phone"] {
        writeln!(file, "{}", word).unwrap();
    }
    file
}

fn spellguard() -> Command {
    Command::cargo_bin("spellguard").unwrap()
}

#[test]
fn check_passes_for_known_words() {
    let dict = wordlist();
    spellguard()
        .args(["--dict"])
        .arg(dict.path())
        .args(["--no-color", "check", "cat", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 words spelled correctly"));
}

#[test]
fn check_fails_with_exit_code_one() {
    let dict = wordlist();
    spellguard()
        .args(["--dict"])
        .arg(dict.path())
        .args(["--no-color", "check", "kat"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("kat"))
        .stdout(predicate::str::contains("cat (1)"));
}

#[test]
fn check_no_fail_suppresses_exit_code() {
    let dict = wordlist();
    spellguard()
        .args(["--dict"])
        .arg(dict.path())
        .args(["--no-color", "--no-fail", "check", "kat"])
        .assert()
        .success();
}

#[test]
fn suggest_emits_ranked_json() {
    let dict = wordlist();
    let output = spellguard()
        .args(["--dict"])
        .arg(dict.path())
        .args(["--format", "json", "suggest", "fone"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["word"], "fone");
    assert_eq!(parsed["suggestions"][0]["word"], "phone");
    assert_eq!(parsed["suggestions"][0]["phonetic_match"], true);
}

#[test]
fn missing_wordlist_is_an_error() {
    spellguard()
        .args(["--dict", "/nonexistent/words.txt", "check", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read wordlist"));
}
