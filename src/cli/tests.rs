use super::*;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_means_chat() {
    let args = parse_args(&["dsa-sage"]);
    assert!(args.command.is_none());
    assert!(args.model.is_none());
    assert!(args.debug_log.is_none());
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let args = parse_args(&["dsa-sage", "chat", "-m", "gemini-pro", "--debug-log", "sage.log"]);
    assert!(matches!(args.command, Some(Commands::Chat)));
    assert_eq!(args.model.as_deref(), Some("gemini-pro"));
    assert_eq!(args.debug_log, Some(PathBuf::from("sage.log")));
}

#[test]
fn say_collects_every_word_of_the_prompt() {
    let args = parse_args(&["dsa-sage", "say", "what", "is", "-1", "in", "two's", "complement"]);
    match args.command {
        Some(Commands::Say { prompt }) => {
            assert_eq!(prompt.join(" "), "what is -1 in two's complement");
        }
        _ => panic!("expected say subcommand"),
    }
}

#[test]
fn set_accepts_multi_word_values() {
    let args = parse_args(&["dsa-sage", "set", "system-instruction", "be", "very", "brief"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key.as_deref(), Some("system-instruction"));
            assert_eq!(value.map(|v| v.join(" ")).as_deref(), Some("be very brief"));
        }
        _ => panic!("expected set subcommand"),
    }
}

#[test]
fn bare_set_parses_without_a_key() {
    let args = parse_args(&["dsa-sage", "set"]);
    assert!(matches!(
        args.command,
        Some(Commands::Set {
            key: None,
            value: None
        })
    ));
}

#[test]
fn unset_requires_a_key() {
    assert!(Args::try_parse_from(["dsa-sage", "unset"]).is_err());
    let args = parse_args(&["dsa-sage", "unset", "model"]);
    assert!(matches!(args.command, Some(Commands::Unset { key }) if key == "model"));
}

#[test]
fn auth_and_deauth_parse() {
    assert!(matches!(parse_args(&["dsa-sage", "auth"]).command, Some(Commands::Auth)));
    assert!(matches!(parse_args(&["dsa-sage", "deauth"]).command, Some(Commands::Deauth)));
}
