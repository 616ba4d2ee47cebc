use clap::Parser;

use roboline::cli::commands::list::Collection;
use roboline::cli::commands::search::KindFilter;
use roboline::cli::commands::show::ShowTarget;
use roboline::cli::{Cli, Commands, OutputFormat};
use roboline::content::ResourceKind;

fn parse_cli(args: &[&str]) -> Cli {
    let mut argv = vec!["roboline"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

fn parse(args: &[&str]) -> Commands {
    parse_cli(args).command
}

#[test]
fn parse_search_with_filters() {
    match parse(&[
        "search", "pid", "-t", "robotics", "--tag", "sensors", "--kind", "resource", "--type",
        "video", "-n", "3",
    ]) {
        Commands::Search(args) => {
            assert_eq!(args.query.as_deref(), Some("pid"));
            assert_eq!(args.tags, vec!["robotics", "sensors"]);
            assert_eq!(args.kind, Some(KindFilter::Resource));
            assert_eq!(args.resource_type, Some(ResourceKind::Video));
            assert_eq!(args.limit, Some(3));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_search_without_query() {
    match parse(&["search"]) {
        Commands::Search(args) => {
            assert!(args.query.is_none());
            assert!(args.tags.is_empty());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_show_phase_with_code() {
    match parse(&["show", "phase", "phase-2", "--code"]) {
        Commands::Show(args) => match args.target {
            ShowTarget::Phase { id, code } => {
                assert_eq!(id, "phase-2");
                assert!(code);
            }
            ShowTarget::Resource { .. } => panic!("expected phase target"),
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_list_collection() {
    match parse(&["list", "resources", "-t", "arduino"]) {
        Commands::List(args) => {
            assert_eq!(args.collection, Collection::Resources);
            assert_eq!(args.tags, vec!["arduino"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_build_flags() {
    match parse(&["build", "--out", "public", "--clean"]) {
        Commands::Build(args) => {
            assert_eq!(args.out.as_deref(), Some(std::path::Path::new("public")));
            assert!(args.clean);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_check_strict() {
    match parse(&["check", "--strict"]) {
        Commands::Check(args) => assert!(args.strict),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse_cli(&["tags", "--robot", "-vv", "--content", "data"]);
    assert!(cli.robot);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output_format(), OutputFormat::Json);
    assert_eq!(cli.content.as_deref(), Some(std::path::Path::new("data")));
}

#[test]
fn format_flag_without_robot() {
    let cli = parse_cli(&["--format", "plain", "list", "phases"]);
    assert_eq!(cli.output_format(), OutputFormat::Plain);
}

#[test]
fn contact_requires_all_fields() {
    let result = Cli::try_parse_from(["roboline", "contact", "--name", "Ada"]);
    assert!(result.is_err());
}
