pub mod bench;
pub mod inspect;
pub mod random;
pub mod sort;

use std::fmt::Display;

use ksortid_core::{ConfigError, GeneratorConfig};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub length: Option<usize>,
    pub random_length: Option<usize>,
    pub pool_size: Option<usize>,
}

/// Load the config file (or defaults) and apply command-line overrides.
pub fn resolve_config(
    path: Option<&str>,
    overrides: &Overrides,
) -> Result<GeneratorConfig, ConfigError> {
    let mut config = match path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(length) = overrides.length {
        config.length = Some(length);
    }
    if let Some(random_length) = overrides.random_length {
        config.random_length = random_length;
    }
    if let Some(pool_size) = overrides.pool_size {
        config.pool_size = pool_size;
    }

    config.validate()?;
    Ok(config)
}

/// Like [`resolve_config`], exiting with an error message on failure.
pub fn load_config(path: Option<&str>, overrides: &Overrides) -> GeneratorConfig {
    let config = resolve_config(path, overrides).unwrap_or_else(|e| exit_with(e));
    log::debug!("resolved config: {config:?}");
    config
}

/// Print `err` to stderr and exit with status 1.
pub fn exit_with(err: impl Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

/// Format an integer with `,` thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
