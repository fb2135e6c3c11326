//! Integration tests for the teller CLI.
//!
//! These tests run the actual binary, feeding menu choices and field values
//! through stdin and checking the messages printed to stdout.

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with a scripted session and return stdout
fn run_session(script: &str) -> String {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    let assert = cmd.write_stdin(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_full_session_deposit_withdraw_statement() {
    let script = "3\n123\nAlice\n01-01-1990\n1 Main St\n\
                  4\n123\n\
                  0\n123\n1000\n\
                  1\n123\n200\n\
                  2\n123\n\
                  5\n\
                  6\n";

    let output = run_session(script);

    assert!(output.contains("Client created!"));
    assert!(output.contains("Account 1 created!"));
    assert!(output.contains("Deposit completed!"));
    assert!(output.contains("Withdrawal completed!"));
    assert!(output.contains("Balance: $ 800.00"));
    assert!(output.contains("Holder:\tAlice"));
    assert!(output.contains("Agency:\t0001"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_unknown_client_is_reported_before_amount_prompt() {
    let output = run_session("0\n999\n6\n");

    assert!(output.contains("Client not found!"));
    // The amount prompt must not appear for an unknown client.
    assert!(!output.contains("Amount to deposit:"));
}

#[test]
fn test_duplicate_client_is_rejected() {
    let script = "3\n123\nAlice\n01-01-1990\n1 Main St\n\
                  3\n123\n\
                  6\n";

    let output = run_session(script);
    assert!(output.contains("A client with this tax ID already exists!"));
    // Only one "Client created!" for the first registration.
    assert_eq!(output.matches("Client created!").count(), 1);
}

#[test]
fn test_invalid_amount_input_resumes_menu() {
    let script = "3\n123\nAlice\n01-01-1990\n1 Main St\n\
                  4\n123\n\
                  0\n123\nabc\n\
                  6\n";

    let output = run_session(script);
    assert!(output.contains("Invalid amount entered."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_withdrawal_failures_surface_messages() {
    let script = "3\n123\nAlice\n01-01-1990\n1 Main St\n\
                  4\n123\n\
                  1\n123\n50\n\
                  0\n123\n1000\n\
                  1\n123\n600\n\
                  6\n";

    let output = run_session(script);
    assert!(output.contains("Operation failed: insufficient balance."));
    assert!(output.contains("exceeds the withdrawal limit of 500.00"));
}

#[test]
fn test_statement_for_fresh_account() {
    let script = "3\n123\nAlice\n01-01-1990\n1 Main St\n\
                  4\n123\n\
                  2\n123\n\
                  6\n";

    let output = run_session(script);
    assert!(output.contains("No transactions recorded."));
    assert!(output.contains("Balance: $ 0.00"));
}

#[test]
fn test_new_account_requires_existing_client() {
    let output = run_session("4\n999\n6\n");
    assert!(output.contains("Operation failed: client not found."));
}

#[test]
fn test_list_accounts_when_empty() {
    let output = run_session("5\n6\n");
    assert!(output.contains("No accounts registered."));
}

#[test]
fn test_unknown_menu_option_reprompts() {
    let output = run_session("9\n6\n");
    assert!(output.contains("Invalid option"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_eof_ends_session_cleanly() {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.write_stdin("").assert().success();
}

#[test]
fn test_no_state_survives_between_sessions() {
    let first = run_session("3\n123\nAlice\n01-01-1990\n1 Main St\n4\n123\n6\n");
    assert!(first.contains("Account 1 created!"));

    // A fresh process starts empty: the same tax ID is unknown again.
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.write_stdin("0\n123\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Client not found!"));
}
