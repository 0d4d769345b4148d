use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use readapdb::core::io::options::{AlternateSelection, ReadOptions};
use std::str::FromStr;
use tracing::debug;

/// Resolves the effective configuration.
///
/// Precedence, highest first: command-line flags, `--set` values, the config
/// file, built-in defaults.
pub fn build_config(args: &Cli) -> Result<AppConfig> {
    if args.input.as_os_str().is_empty() {
        return Err(CliError::Argument("The input path is empty.".to_string()));
    }

    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let reader_file = file_config.reader.take().unwrap_or_default();

    let model = args
        .model
        .or(reader_file.model)
        .unwrap_or(defaults.model);

    let include_hetatm = if args.no_hetatm {
        false
    } else {
        reader_file
            .include_hetatm
            .unwrap_or(defaults.include_hetatm)
    };

    let alternates = if args.all_alternates {
        AlternateSelection::KeepAll
    } else if let Some(rank) = args.occupancy_rank {
        AlternateSelection::ByOccupancyRank(rank)
    } else if reader_file
        .all_alternates
        .unwrap_or(defaults.all_alternates)
    {
        AlternateSelection::KeepAll
    } else {
        AlternateSelection::ByOccupancyRank(
            reader_file
                .occupancy_rank
                .unwrap_or(defaults.occupancy_rank),
        )
    };

    let strict = args.strict || file_config.strict.unwrap_or(defaults.strict);

    let read_options = ReadOptions::builder()
        .model(model)
        .include_hetatm(include_hetatm)
        .alternates(alternates)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?read_options, strict, "Resolved configuration.");

    Ok(AppConfig {
        input_path: args.input.clone(),
        read_options,
        strict,
    })
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "reader.model" => {
                config.reader.get_or_insert_with(Default::default).model =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "reader.occupancy-rank" => {
                config
                    .reader
                    .get_or_insert_with(Default::default)
                    .occupancy_rank = Some(parse_value(key, value_str, "integer")?);
            }
            "reader.include-hetatm" => {
                config
                    .reader
                    .get_or_insert_with(Default::default)
                    .include_hetatm = Some(parse_value(key, value_str, "boolean")?);
            }
            "reader.all-alternates" => {
                config
                    .reader
                    .get_or_insert_with(Default::default)
                    .all_alternates = Some(parse_value(key, value_str, "boolean")?);
            }
            "strict" => {
                config.strict = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
