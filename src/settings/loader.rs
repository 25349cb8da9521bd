use anyhow::{Result, anyhow};

use crate::cli::CliArgs;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use crate::cli::CliArgs;

    use super::load;

    #[test]
    fn explicit_config_file_supplies_endpoint_and_theme() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saltscout.toml");
        fs::write(
            &path,
            concat!(
                "[api]\n",
                "endpoint = \"https://example.test/search\"\n",
                "pharmacy_ids = [\"4\", \"5\"]\n",
                "\n",
                "[ui]\n",
                "theme = \"light\"\n",
            ),
        )
        .expect("write config");

        let cli = CliArgs::parse_from([
            "saltscout",
            "--no-config",
            "--config",
            path.to_str().expect("utf-8 path"),
        ]);
        let resolved = load(&cli).expect("loads");

        assert_eq!(resolved.endpoint, "https://example.test/search");
        assert_eq!(resolved.pharmacy_ids, "4,5");
        assert_eq!(resolved.theme.as_deref(), Some("light"));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saltscout.toml");
        fs::write(&path, "[ui]\ntheme = \"light\"\n").expect("write config");

        let mut cli = CliArgs::parse_from([
            "saltscout",
            "--no-config",
            "--config",
            path.to_str().expect("utf-8 path"),
        ]);
        cli.theme = Some("slate".into());

        let resolved = load(&cli).expect("loads");
        assert_eq!(resolved.theme.as_deref(), Some("slate"));
    }
}
