//! Command-line interface for nowplaying
//! Renders share text for a track, or inspects how a format string is tokenized.
//!
//! Usage:
//!   nowplaying render [--config `<file>`] [--format `<fmt>`] [track options]  - Print the share text
//!   nowplaying tokens [--config `<file>`] [--format `<fmt>`]                  - Print the token stream as JSON
//!   nowplaying codes                                                        - List placeholder codes
//!
//! Set `NOWPLAYING_LOG=debug` to see how settings were layered.

use clap::{Arg, ArgAction, ArgMatches, Command};
use nowplaying::share::track::spotify;
use nowplaying::share::{
    Loader, Modifier, PlaceholderCode, ShareError, ShareSettings, TrackSnapshot,
};
use std::fs;
use tracing_subscriber::EnvFilter;

fn settings_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Settings file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_name("FORMAT")
                .help("Format string, overriding the configured one"),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NOWPLAYING_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("nowplaying")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render now playing share text from a format string")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            settings_args(Command::new("render").about("Render the share text for a track"))
                .arg(Arg::new("title").long("title").help("Track title"))
                .arg(Arg::new("artist").long("artist").help("Track artist"))
                .arg(Arg::new("album").long("album").help("Album name"))
                .arg(Arg::new("composer").long("composer").help("Composer, if known"))
                .arg(Arg::new("url").long("url").help("Source url, if known"))
                .arg(
                    Arg::new("track")
                        .long("track")
                        .value_name("FILE")
                        .conflicts_with_all(["spotify", "title", "artist", "album"])
                        .help("JSON track snapshot"),
                )
                .arg(
                    Arg::new("spotify")
                        .long("spotify")
                        .value_name("FILE")
                        .conflicts_with_all(["title", "artist", "album"])
                        .help("JSON body of a currently-playing player response"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .value_name("CODE=TEXT")
                        .action(ArgAction::Append)
                        .help("Text placed before a placeholder's value"),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .value_name("CODE=TEXT")
                        .action(ArgAction::Append)
                        .help("Text placed after a placeholder's value"),
                ),
        )
        .subcommand(settings_args(
            Command::new("tokens").about("Print the token stream of a format string as JSON"),
        ))
        .subcommand(Command::new("codes").about("List the placeholder codes"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("codes", _)) => {
            handle_codes_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load settings from defaults, the optional config file and the `--format` override.
fn load_settings(matches: &ArgMatches) -> Result<ShareSettings, ShareError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("format", format.as_str())?;
    }
    loader.build()
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> Result<(), ShareError> {
    let mut settings = load_settings(matches)?;
    apply_modifier_args(&mut settings, matches)?;
    let track = read_track(matches)?;
    println!("{}", settings.render(&track));
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<(), ShareError> {
    let settings = load_settings(matches)?;
    let json = serde_json::to_string_pretty(&settings.tokens())
        .map_err(|e| ShareError::IoError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Handle the codes command
fn handle_codes_command() {
    println!("Placeholder codes:\n");
    for code in PlaceholderCode::ALL {
        let wrap = if code.is_replaceable() {
            ""
        } else {
            " (no modifier)"
        };
        println!("  {:<4}{}{}", code.raw(), code.describe(), wrap);
    }
}

fn read_track(matches: &ArgMatches) -> Result<TrackSnapshot, ShareError> {
    if let Some(path) = matches.get_one::<String>("track") {
        return TrackSnapshot::from_json(&fs::read_to_string(path)?);
    }
    let mut track = match matches.get_one::<String>("spotify") {
        Some(path) => spotify::snapshot_from_json(&fs::read_to_string(path)?)?,
        None => {
            let field = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();
            TrackSnapshot::new(field("title"), field("artist"), field("album"))
        }
    };
    if let Some(composer) = matches.get_one::<String>("composer") {
        track = track.with_composer(composer.as_str());
    }
    if let Some(url) = matches.get_one::<String>("url") {
        track = track.with_source_url(url.as_str());
    }
    Ok(track)
}

fn apply_modifier_args(settings: &mut ShareSettings, matches: &ArgMatches) -> Result<(), ShareError> {
    let prefixes = matches.get_many::<String>("prefix").into_iter().flatten();
    for arg in prefixes {
        let (code, text) = parse_modifier_arg(arg)?;
        let suffix = settings.modifiers.suffix(code).to_string();
        settings.modifiers.set(Modifier::new(code, text, suffix));
    }
    let suffixes = matches.get_many::<String>("suffix").into_iter().flatten();
    for arg in suffixes {
        let (code, text) = parse_modifier_arg(arg)?;
        let prefix = settings.modifiers.prefix(code).to_string();
        settings.modifiers.set(Modifier::new(code, prefix, text));
    }
    Ok(())
}

/// Parse `CODE=TEXT` where CODE is a track-field placeholder.
fn parse_modifier_arg(arg: &str) -> Result<(PlaceholderCode, &str), ShareError> {
    let (raw, text) = arg
        .split_once('=')
        .ok_or_else(|| ShareError::InvalidModifierArgument(arg.to_string()))?;
    match PlaceholderCode::from_raw(raw) {
        Some(code) if code.is_replaceable() => Ok((code, text)),
        _ => Err(ShareError::InvalidModifierArgument(arg.to_string())),
    }
}
