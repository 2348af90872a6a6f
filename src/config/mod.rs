mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CheckConfig, Config, ScannerConfig, TemplateConfig};
pub use validation::{MIN_TEMPLATE_WIDTH, validate_config_semantics};
