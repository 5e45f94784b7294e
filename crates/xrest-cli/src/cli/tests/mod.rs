//! CLI parse tests.

use super::{parse_header, parse_param, Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn parse_get_with_headers_and_params() {
    match parse(&[
        "xrest",
        "get",
        "https://example.com/ticker",
        "-H",
        "Key: abc",
        "--header",
        "X-Sign:  s1 ",
        "-F",
        "pair=btc_usd",
    ]) {
        CliCommand::Get { url, headers, form } => {
            assert_eq!(url, "https://example.com/ticker");
            assert_eq!(
                headers,
                vec![
                    ("Key".to_string(), "abc".to_string()),
                    ("X-Sign".to_string(), "s1".to_string()),
                ]
            );
            assert_eq!(form, vec![("pair".to_string(), "btc_usd".to_string())]);
        }
        other => panic!("expected Get, got {:?}", other),
    }
}

#[test]
fn parse_post_with_data() {
    match parse(&["xrest", "post", "https://example.org/accountinfo", "--data", "Example"]) {
        CliCommand::Post {
            url,
            data,
            headers,
            form,
        } => {
            assert_eq!(url, "https://example.org/accountinfo");
            assert_eq!(data.as_deref(), Some("Example"));
            assert!(headers.is_empty());
            assert!(form.is_empty());
        }
        other => panic!("expected Post, got {:?}", other),
    }
}

#[test]
fn parse_post_form_only() {
    match parse(&["xrest", "post", "https://example.org/tapi", "-F", "nonce=1", "-F", "method=getInfo"]) {
        CliCommand::Post { data, form, .. } => {
            assert!(data.is_none());
            assert_eq!(form.len(), 2);
            assert_eq!(form[1].0, "method");
        }
        other => panic!("expected Post, got {:?}", other),
    }
}

#[test]
fn malformed_header_is_rejected() {
    assert!(Cli::try_parse_from(["xrest", "get", "https://example.com", "-H", "NoColon"]).is_err());
    assert!(parse_header(": value").is_err());
}

#[test]
fn param_value_may_contain_equals() {
    assert_eq!(
        parse_param("sig=a=b").unwrap(),
        ("sig".to_string(), "a=b".to_string())
    );
    assert!(parse_param("novalue").is_err());
}

#[test]
fn missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["xrest"]).is_err());
}
