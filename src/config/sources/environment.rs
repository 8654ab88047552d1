//! Environment variable source: TAGDEX_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub(crate) const ENV_PREFIX: &str = "TAGDEX";

/// Add environment variable overlay to builder.
/// Uses TAGDEX_ prefix and __ as separator for nested keys,
/// e.g. `TAGDEX_INDEX__ROOT=/srv/notes`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
