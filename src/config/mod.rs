mod cursor_rules;
mod filesystem;
mod loader;
mod model;

pub use cursor_rules::{CURSOR_RULES_DIR, parse_rule_file};
pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{LOCAL_CONFIG_NAME, SettingsLoader, local_config_path};
pub use model::{
    CodeStyleOverrides, CodeStyleSettings, DEFAULT_MAX_LINE_LENGTH, MetricOverrides,
    PerformanceMetrics, PerformanceOverrides, PerformanceSettings, Settings, SettingsOverrides,
};
