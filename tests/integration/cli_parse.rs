use clap::{CommandFactory, Parser};
use tagdex::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["tagdex", "sync"],
        vec!["tagdex", "sync", "--format", "json"],
        vec!["tagdex", "search", "beach"],
        vec!["tagdex", "search", "beach", "--no-sync", "--format", "json"],
        vec!["tagdex", "list"],
        vec!["tagdex", "--root", "/srv/notes", "--store", "/tmp/s", "list"],
        vec!["tagdex", "--log-level", "debug", "--log-output", "stdout", "sync"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_input() {
    assert!(Cli::try_parse_from(["tagdex"]).is_err());
    assert!(Cli::try_parse_from(["tagdex", "search"]).is_err());
    assert!(Cli::try_parse_from(["tagdex", "sync", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["tagdex", "watch"]).is_err());
}

#[test]
fn search_arguments_are_captured() {
    let cli = Cli::try_parse_from(["tagdex", "search", "Holiday", "--no-sync"]).unwrap();
    match cli.command {
        Commands::Search {
            tag,
            format,
            no_sync,
        } => {
            assert_eq!(tag, "Holiday");
            assert_eq!(format, "text");
            assert!(no_sync);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
