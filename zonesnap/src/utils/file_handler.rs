use crate::Config;
use anyhow::Result;
use ron::{
    Options,
    extensions::Extensions,
    ser::{PrettyConfig, to_string_pretty},
};
use serde::de::DeserializeOwned;
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r"// zonesnap configuration
//
// Hold `zone_modifier` while dragging a window to snap it into a zone. `multi_zone_modifier`
// also takes the zones next to the cursor, `span_modifier` every zone the cursor crosses.
// Run `zonesnap-check` after editing this file.

";

/// Existing config file in the XDG config dir. RON wins over TOML.
enum ConfigFile {
    Found(PathBuf),
    Missing { default_path: PathBuf },
}

fn find_config_file() -> Result<ConfigFile> {
    let base = BaseDirectories::with_prefix("zonesnap")?;
    let ron_file = base.place_config_file("config.ron")?;
    if ron_file.exists() {
        return Ok(ConfigFile::Found(ron_file));
    }
    let toml_file = base.place_config_file("config.toml")?;
    if toml_file.exists() {
        return Ok(ConfigFile::Found(toml_file));
    }
    Ok(ConfigFile::Missing {
        default_path: ron_file,
    })
}

/// Config from the XDG config dir. A default `config.ron` is written there when none exists.
///
/// # Errors
///
/// Errors when the XDG dirs are unusable, or the file is unreadable or malformed, or the default
/// cannot be written.
pub(crate) fn load_config_file() -> Result<Config> {
    match find_config_file()? {
        ConfigFile::Found(path) => {
            tracing::debug!("Loading config file {}", path.display());
            load_from_path(&path)
        }
        ConfigFile::Missing { default_path } => {
            tracing::info!("No config file, writing defaults to {}", default_path.display());
            let config = Config::default();
            write_to_file(&default_path, &config)?;
            Ok(config)
        }
    }
}

/// Config from `fspath`, or from the XDG config dir when no path is given.
///
/// # Errors
///
/// Errors when the file cannot be read or parsed. A path that does not exist is an error too.
pub fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = match fspath {
        Some(fspath) => {
            println!("\x1b[1;35mNote: Using file {fspath} \x1b[0m");
            PathBuf::from(fspath)
        }
        None => match find_config_file()? {
            ConfigFile::Found(path) => path,
            ConfigFile::Missing { default_path } => {
                let config = Config::default();
                write_to_file(&default_path, &config)?;
                println!(
                    "\x1b[1;35mNote: Wrote a default config to {} \x1b[0m",
                    default_path.display()
                );
                return Ok(config);
            }
        },
    };

    if verbose {
        dbg!(&config_filename);
    }
    load_from_path(&config_filename)
}

/// Reads a file as TOML or JSON by extension. Anything else is read as RON.
///
/// # Errors
///
/// Errors if the file cannot be read or parsed.
pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    parse_contents(path, &contents)
}

fn parse_contents<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T> {
    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => Ok(toml::from_str(contents)?),
        Some("json") => Ok(serde_json::from_str(contents)?),
        _ => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            Ok(ron.from_str(contents)?)
        }
    }
}

/// Pretty RON with the comment header on top.
///
/// # Errors
///
/// Errors when the config cannot be serialized or the file cannot be written.
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let pretty = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let body = to_string_pretty(config, pretty)?;
    let mut file = File::create(path)?;
    file.write_all(COMMENT_HEADER.as_bytes())?;
    file.write_all(body.as_bytes())?;
    Ok(())
}
