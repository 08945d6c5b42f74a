use std::io::Write;
use std::process::{Command, Stdio};

fn salvo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_salvo"))
}

#[test]
fn templates_lists_classic() {
    let output = salvo().arg("templates").output().expect("failed to run salvo");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("classic (10x10)"));
}

#[test]
fn play_auto_place_then_quit() {
    let mut child = salvo()
        .args(["play", "--seed", "12345", "--difficulty", "hard", "--auto-place"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn salvo");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"A1\nA1\nquit\n")
        .expect("failed to write input");
    let output = child.wait_with_output().expect("salvo did not exit");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("All ships placed"));
    assert!(stdout.contains("You fired at A1"));
    assert!(stdout.contains("Opponent fired at"));
    assert!(stdout.contains("already shot"));
}

#[test]
fn play_rejects_unknown_difficulty() {
    let output = salvo()
        .args(["play", "--difficulty", "impossible"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run salvo");
    assert!(!output.status.success());
}

#[test]
fn play_rejects_unknown_template() {
    let output = salvo()
        .args(["play", "--template", "nope", "--auto-place"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run salvo");
    assert!(!output.status.success());
}
