//! Infrastructure constants

/// Environment variable prefix for configuration overrides (e.g. `CDA_SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "CDA";

/// Environment variable consulted for the tracing filter
pub const LOG_FILTER_ENV: &str = "CDA_LOG";

/// Default configuration filename
pub const DEFAULT_CONFIG_FILENAME: &str = "cda.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "code-doc-agent";

/// Filename of the project metadata record inside a project directory
pub const PROJECT_RECORD_FILENAME: &str = "project.json";

/// Subdirectory holding generated artifacts
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Subdirectory holding source snapshots
pub const SNAPSHOTS_DIR: &str = "snapshots";
