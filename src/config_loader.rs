use crate::config::Config;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load, parse and validate a configuration file.
///
/// Files with a `.json` extension are parsed as JSON, everything else as YAML.
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: Config = if is_json(config_path) {
        serde_json::from_reader(file)
            .wrap_err_with(|| format!("Failed to parse JSON configuration '{}'", config_path.display()))?
    } else {
        serde_yaml::from_reader(file)
            .wrap_err_with(|| format!("Failed to parse YAML configuration '{}'", config_path.display()))?
    };

    config.validate()?;

    info!(
        "Network '{}' with {} pattern level(s), entry level {:?}",
        config.network.name,
        config.network.pattern.len(),
        config.network.entry_key()
    );

    Ok(config)
}

/// CLI arguments that can override configuration file settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
}

/// Apply CLI overrides to a loaded configuration
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<()> {
    if let Some(seed) = overrides.seed {
        info!("Using identifier seed {} from command line", seed);
        config.general.seed = Some(seed);
    }

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}
