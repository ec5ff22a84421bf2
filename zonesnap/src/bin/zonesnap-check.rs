use anyhow::{Result, bail};
use clap::{arg, command};
use zonesnap::utils::file_handler::check_config_file;

fn main() -> Result<()> {
    let matches = command!("zonesnap check")
        .about("Checks syntax and consistency of the configuration file")
        .help_template(zonesnap::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config dir otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m zonesnap version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m zonesnap git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );
    print_enabled_features();

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => bail!("Configuration failed. Reason: {e:?}"),
    };

    // Every check runs so all problems are reported at once.
    let checks = [
        config.check_log_level(verbose),
        config.check_layouts(verbose),
        config.check_bindings(verbose),
        config.check_selector(verbose),
    ];
    if checks.contains(&false) {
        bail!("The configuration has errors, see above.");
    }
    Ok(())
}

fn print_enabled_features() {
    if env!("ZONESNAP_FEATURES").trim().is_empty() {
        println!("\x1b[0;94m::\x1b[0m Built with no enabled features.");
    } else {
        println!(
            "\x1b[0;94m::\x1b[0m Enabled features:{}",
            env!("ZONESNAP_FEATURES")
        );
    }
}
