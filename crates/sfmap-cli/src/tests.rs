use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sfmap-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_fetch_with_defaults() {
    let cli = Cli::try_parse_from(["sfmap-cli", "fetch"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Fetch {
            out_dir: None,
            dry_run: false
        })
    ));
}

#[test]
fn parses_fetch_dry_run_with_out_dir() {
    let cli = Cli::try_parse_from(["sfmap-cli", "fetch", "--out-dir", "/tmp/data", "--dry-run"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Fetch { out_dir, dry_run }) => {
            assert_eq!(out_dir, Some(PathBuf::from("/tmp/data")));
            assert!(dry_run);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_requires_input() {
    assert!(Cli::try_parse_from(["sfmap-cli", "parse"]).is_err());
}

#[test]
fn parses_parse_command() {
    let cli = Cli::try_parse_from(["sfmap-cli", "parse", "--input", "map.json"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Parse { input, out_dir }) => {
            assert_eq!(input, PathBuf::from("map.json"));
            assert!(out_dir.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn group_takes_type_flag() {
    let cli = Cli::try_parse_from(["sfmap-cli", "group", "--type", "spawns"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Group {
            category_type,
            input,
        }) => {
            assert_eq!(category_type, "spawns");
            assert!(input.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn group_requires_type() {
    assert!(Cli::try_parse_from(["sfmap-cli", "group"]).is_err());
}

#[test]
fn parses_tabs_with_input() {
    let cli = Cli::try_parse_from(["sfmap-cli", "tabs", "--input", "map.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Tabs { input: Some(_) })
    ));
}

#[test]
fn help_exits_through_clap() {
    let err = Cli::try_parse_from(["sfmap-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
