use std::process::Command;

fn trisort(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_trisort"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run trisort binary")
}

#[test]
fn test_success_exits_zero() {
    let output = trisort(&["dog", "cat", "cow"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n2\n0\n");
}

#[test]
fn test_malformed_input_exits_non_zero() {
    let output = trisort(&["ab", "a"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("key 1"));
}

#[test]
fn test_conflicting_flags_exit_non_zero() {
    let output = trisort(&["--width", "2", "--terminated", "ab"]);
    assert!(!output.status.success());
}
