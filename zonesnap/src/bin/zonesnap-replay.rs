use anyhow::{Context, Result};
use clap::{arg, command};
use std::path::Path;
use zonesnap::replay::{Replay, Script};
use zonesnap::utils::file_handler::load_from_path;

fn main() -> Result<()> {
    let matches = command!("zonesnap replay")
        .about("Feeds a scripted drag through the snap engine and prints every snap result as JSON")
        .help_template(zonesnap::utils::get_help_template())
        .args(&[
            arg!(<SCRIPT> "RON or JSON file with `screens` and `events`."),
            arg!(-c --config <FILE> "Config file to use instead of the one in the XDG config dir."),
            arg!(-v --verbose "Also prints every overlay action."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let config = match matches.get_one::<String>("config") {
        Some(path) => load_from_path(Path::new(path))
            .with_context(|| format!("Could not load config file {path}"))?,
        None => zonesnap::load(),
    };
    zonesnap::utils::log::setup(&config.log_level);

    let script_path = matches
        .get_one::<String>("SCRIPT")
        .context("No script given")?;
    let script = Script::load(Path::new(script_path))
        .with_context(|| format!("Could not load script {script_path}"))?;
    tracing::info!(
        "Replaying {} event(s) on {} screen(s)",
        script.events.len(),
        script.screens.len()
    );

    let mut replay = Replay::new(config, verbose)?;
    let mut failed = None;
    replay.run(script, |step| match serde_json::to_string(step) {
        Ok(json) => println!("{json}"),
        Err(err) => failed = Some(err),
    });
    if let Some(err) = failed {
        return Err(err).context("Could not serialize a snap result");
    }
    Ok(())
}
