use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand: show the effective settings.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Config { print_config: true }) {
        let path = Config::config_file();
        if path.exists() {
            println!("📄 Configuration file: {}\n", path.display());
        } else {
            println!("📄 No configuration file, using defaults.\n");
        }

        // The key itself is not echoed back.
        let shown = Config {
            admin_key: "*".repeat(cfg.admin_key.chars().count()),
            ..cfg.clone()
        };
        print!("{}", serde_yaml::to_string(&shown)?);
    }

    Ok(())
}
