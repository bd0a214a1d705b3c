use crate::cli::Cli;
use crate::commands::Commands;

use clap::{CommandFactory, Parser};
use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_login_args_when_parsed_then_iv_defaults_to_empty() {
    // When
    let cli = Cli::try_parse_from(["aifa", "login", "13800000000", "--code", "123456"]).unwrap();

    // Then
    assert_that!(
        cli.command,
        eq(&Commands::Login {
            phone: "13800000000".to_string(),
            code: "123456".to_string(),
            iv: String::new(),
        })
    );
    assert_that!(cli.pretty, eq(false));
}

#[test]
fn given_pretty_after_subcommand_when_parsed_then_flag_is_global() {
    let cli = Cli::try_parse_from(["aifa", "status", "--pretty"]).unwrap();

    assert_that!(cli.command, eq(&Commands::Status));
    assert_that!(cli.pretty, eq(true));
}

#[test]
fn given_send_code_without_phone_when_parsed_then_error() {
    let result = Cli::try_parse_from(["aifa", "send-code"]);

    assert!(result.is_err());
}

#[test]
fn given_login_without_code_when_parsed_then_error() {
    let result = Cli::try_parse_from(["aifa", "login", "13800000000"]);

    assert!(result.is_err());
}

#[test]
fn given_web_version_when_parsed_then_env_is_optional() {
    let plain = Cli::try_parse_from(["aifa", "web-version"]).unwrap();
    let overridden = Cli::try_parse_from(["aifa", "web-version", "--env", "prod"]).unwrap();

    match (plain.command, overridden.command) {
        (Commands::WebVersion { env: plain }, Commands::WebVersion { env: overridden }) => {
            assert_that!(plain, none());
            assert_that!(overridden, some(eq("prod")));
        }
        other => panic!("Expected WebVersion commands, got {other:?}"),
    }
}

#[test]
fn given_send_code_help_when_rendered_then_single_run_countdown_noted() {
    // Given
    let command = Cli::command();

    // When
    let help = command
        .find_subcommand("send-code")
        .and_then(|sub| sub.get_long_about())
        .map(|about| about.to_string())
        .unwrap_or_default();

    // Then
    assert!(help.contains("only enforced within a single run"));
}
