use crate::config::AppConfig;
use crate::error::{CliError, Result};
use readapdb::workflows;
use tracing::{info, warn};

/// Loads the configured file.
///
/// A load failure is reported as a warning and swallowed, unless the
/// configuration is strict, in which case it is returned.
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Loading input structure from {:?}", &config.input_path);

    match workflows::load::run(&config.input_path, &config.read_options) {
        Ok(report) => {
            info!(
                identifier = report.header.identifier.as_deref().unwrap_or("-"),
                resolution = ?report.header.resolution,
                models = report.header.model_count,
                "Loaded {} atom(s) into {} chain(s): {} ligand(s), {} water(s).",
                report.atom_count,
                report.structure.chain_count(),
                report.structure.ligands().count(),
                report.structure.waters().count()
            );
            Ok(())
        }
        Err(e) if config.strict => Err(CliError::Load(e)),
        Err(e) => {
            warn!(stage = %e.stage(), "{}", e);
            Ok(())
        }
    }
}
