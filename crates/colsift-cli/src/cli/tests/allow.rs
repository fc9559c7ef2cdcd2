//! Tests for the allow subcommands.

use super::parse;
use crate::cli::{AllowCommand, Cli, CliCommand};
use clap::Parser;

fn parse_allow(args: &[&str]) -> AllowCommand {
    match parse(args) {
        CliCommand::Allow { action } => action,
        _ => panic!("expected Allow"),
    }
}

#[test]
fn cli_parse_allow_list() {
    assert!(matches!(parse_allow(&["colsift", "allow", "list"]), AllowCommand::List));
}

#[test]
fn cli_parse_allow_add() {
    match parse_allow(&["colsift", "allow", "add", "Gr. WT", "QTY"]) {
        AllowCommand::Add { names } => {
            assert_eq!(names, vec!["Gr. WT".to_string(), "QTY".to_string()]);
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_allow_add_requires_names() {
    assert!(Cli::try_parse_from(["colsift", "allow", "add"]).is_err());
}

#[test]
fn cli_parse_allow_remove() {
    match parse_allow(&["colsift", "allow", "remove", "QTY"]) {
        AllowCommand::Remove { name } => assert_eq!(name, "QTY"),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_allow_seed() {
    assert!(matches!(parse_allow(&["colsift", "allow", "seed"]), AllowCommand::Seed));
}
