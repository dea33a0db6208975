use std::path::{Path, PathBuf};

use crate::error::{GuidelineGuardError, Result};

use super::cursor_rules::{CURSOR_RULES_DIR, RULE_FILE_EXTENSION, parse_rule_file};
use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{Settings, SettingsOverrides};

pub const LOCAL_CONFIG_NAME: &str = ".guideline-guard.toml";

/// Resolves [`Settings`] for a scan root.
///
/// Sources, lowest precedence first: built-in defaults, `.cursor/rules/*.mdc`,
/// the local `.guideline-guard.toml` (or an explicit config path). Problems
/// with implicit sources are logged and skipped; only an explicit config path
/// that cannot be read or parsed is an error.
#[derive(Debug, Clone)]
pub struct SettingsLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for SettingsLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> SettingsLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Load settings for `root`.
    ///
    /// # Errors
    /// Returns an error if `explicit_config` is given and cannot be read or
    /// parsed.
    pub fn load(&self, root: &Path, explicit_config: Option<&Path>) -> Result<Settings> {
        let mut settings = Settings::default();
        settings.apply(&self.load_cursor_rules(root));

        match explicit_config {
            Some(path) => settings.apply(&self.load_from_path(path)?),
            None => {
                let local = local_config_path(root);
                if self.fs.exists(&local) {
                    match self.load_from_path(&local) {
                        Ok(overrides) => settings.apply(&overrides),
                        Err(e) => log::warn!("{e}; ignoring {}", local.display()),
                    }
                }
            }
        }

        Ok(settings)
    }

    /// Parse one TOML settings file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// the settings schema.
    pub fn load_from_path(&self, path: &Path) -> Result<SettingsOverrides> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| GuidelineGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Ok(toml::from_str(&content)?)
    }

    /// Merge every `.mdc` rule file under `root/.cursor/rules`, in file-name
    /// order.
    #[must_use]
    pub fn load_cursor_rules(&self, root: &Path) -> SettingsOverrides {
        let dir = root.join(CURSOR_RULES_DIR);
        let mut overrides = SettingsOverrides::default();

        if !self.fs.exists(&dir) {
            log::warn!("{CURSOR_RULES_DIR} directory not found. Using default checks.");
            return overrides;
        }

        let entries = match self.fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Error reading {}: {e}", dir.display());
                return overrides;
            }
        };

        for path in entries.iter().filter(|p| is_rule_file(p)) {
            let name = file_name(path);
            match self.fs.read_to_string(path) {
                Ok(content) => {
                    merge_into(&mut overrides, &parse_rule_file(&name, &content));
                }
                Err(e) => log::warn!("Error reading {}: {e}", path.display()),
            }
        }

        log::debug!("Settings from cursor rules: {overrides:?}");
        overrides
    }
}

fn is_rule_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RULE_FILE_EXTENSION)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn merge_into(target: &mut SettingsOverrides, later: &SettingsOverrides) {
    if later.code_style.max_line_length.is_some() {
        target.code_style.max_line_length = later.code_style.max_line_length;
    }
    let (dst, src) = (
        &mut target.performance.metrics,
        later.performance.metrics,
    );
    dst.fcp = src.fcp.or(dst.fcp);
    dst.lcp = src.lcp.or(dst.lcp);
    dst.ttfb = src.ttfb.or(dst.ttfb);
    dst.inp = src.inp.or(dst.inp);
    dst.cls = src.cls.or(dst.cls);
}

/// Path of the local settings file for `root`.
#[must_use]
pub fn local_config_path(root: &Path) -> PathBuf {
    root.join(LOCAL_CONFIG_NAME)
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
