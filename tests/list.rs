use assert_cmd::Command;
use predicates::prelude::*;

fn add(name: &str, phone: &str, category: &str) -> String {
    format!("1\n{name}\n{phone}\n{category}\n")
}

fn listing(stdout: &[u8]) -> Vec<String> {
    // Table rows look like "  1. Name   phone   category"
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            line.split_once(". ")
                .is_some_and(|(n, rest)| n.parse::<usize>().is_ok() && rest.contains("   "))
        })
        .map(|line| line.trim().to_string())
        .collect()
}

#[test]
fn listing_contacts() {
    let mut script = String::new();
    script.push_str(&add("Patricia", "08066809241", "Other"));
    script.push_str(&add("Diane", "08064879199", "Family"));
    script.push_str(&add("John", "08046516806", "Friends"));
    script.push_str(&add("Wayne", "08062866694", "Friends"));
    script.push_str(&add("Alice", "08031234567", "Work"));

    let run = |view: &str| {
        Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .write_stdin(format!("{script}{view}\n10\n"))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let fifo = listing(&run("3"));
    let lifo = listing(&run("4"));
    let sorted = listing(&run("2"));
    let quick = listing(&run("5"));
    let merge = listing(&run("6"));

    assert_eq!(fifo.len(), 5);
    assert!(fifo[0].contains("Patricia") && fifo[4].contains("Alice"));
    assert!(lifo[0].contains("Alice") && lifo[4].contains("Patricia"));

    assert!(sorted[0].contains("Alice") && sorted[1].contains("Diane"));
    assert!(sorted[4].contains("Wayne"));
    assert_eq!(sorted, quick);
    assert_eq!(sorted, merge);
}

#[test]
fn listing_by_category() {
    let mut script = String::new();
    script.push_str(&add("John", "1", "Friends"));
    script.push_str(&add("Alice", "2", "Work"));
    script.push_str(&add("Wayne", "3", "Friends"));
    script.push_str("7\nFriends\n10\n");

    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows = listing(&output);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("John") && rows[1].contains("Wayne"));
}

#[test]
fn empty_store_lists_nothing() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .write_stdin("2\n3\n4\n5\n6\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found.").count(5));
}

#[test]
fn json_format_from_env() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .env("CONTACTS_FORMAT", "json")
        .write_stdin(format!("{}3\n10\n", add("Ann", "555", "Family")))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"Family\""));
}

#[test]
fn invalid_menu_entry() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .write_stdin("and\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command: 'and'"));
}

#[test]
fn invalid_flag_value_fails() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["--search-mode", "fuzzy"])
        .assert()
        .failure();
}
