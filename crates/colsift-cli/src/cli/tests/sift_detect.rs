//! Tests for sift, detect and normalize subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_sift() {
    match parse(&["colsift", "sift", "stock.xlsx", "-o", "report123"]) {
        CliCommand::Sift {
            input,
            output,
            format,
            sheet,
        } => {
            assert_eq!(input, Path::new("stock.xlsx"));
            assert_eq!(output, "report123");
            assert!(format.is_none());
            assert!(sheet.is_none());
        }
        _ => panic!("expected Sift"),
    }
}

#[test]
fn cli_parse_sift_format_and_sheet() {
    match parse(&[
        "colsift", "sift", "in.xls", "--output", "out", "--format", "csv", "--sheet", "2",
    ]) {
        CliCommand::Sift { format, sheet, .. } => {
            assert_eq!(format, Some(FormatArg::Csv));
            assert_eq!(sheet, Some(2));
        }
        _ => panic!("expected Sift with --format and --sheet"),
    }
}

#[test]
fn cli_sift_requires_output_name() {
    assert!(Cli::try_parse_from(["colsift", "sift", "stock.xlsx"]).is_err());
}

#[test]
fn cli_sift_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["colsift", "sift", "a.csv", "-o", "b", "--format", "pdf"]).is_err());
}

#[test]
fn cli_parse_detect() {
    match parse(&["colsift", "detect", "stock.csv"]) {
        CliCommand::Detect { input, sheet, json } => {
            assert_eq!(input, Path::new("stock.csv"));
            assert!(sheet.is_none());
            assert!(!json);
        }
        _ => panic!("expected Detect"),
    }
}

#[test]
fn cli_parse_detect_json() {
    match parse(&["colsift", "detect", "stock.xlsx", "--json", "--sheet", "1"]) {
        CliCommand::Detect { sheet, json, .. } => {
            assert!(json);
            assert_eq!(sheet, Some(1));
        }
        _ => panic!("expected Detect with --json"),
    }
}

#[test]
fn cli_parse_normalize() {
    match parse(&["colsift", "normalize", "Gr. WT", "QTY"]) {
        CliCommand::Normalize { labels } => {
            assert_eq!(labels, vec!["Gr. WT".to_string(), "QTY".to_string()]);
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_normalize_requires_a_label() {
    assert!(Cli::try_parse_from(["colsift", "normalize"]).is_err());
}
