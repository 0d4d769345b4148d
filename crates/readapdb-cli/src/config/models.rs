use readapdb::core::io::options::ReadOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub read_options: ReadOptions,
    /// Whether a load failure should change the exit status.
    pub strict: bool,
}
