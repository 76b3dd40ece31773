use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        } else {
            info(format!(
                "No configuration file at {}; effective defaults:",
                path.display()
            ));
            println!("{}", serde_yaml::to_string(cfg)?);
        }
        Ok(())
    }

    /// Report keys missing from the file. Returns true when the file is complete.
    pub fn check(path: &Path) -> AppResult<bool> {
        let missing = migrate::missing_fields(path)?;
        if missing.is_empty() {
            success(format!("Configuration {} is complete.", path.display()));
            Ok(true)
        } else {
            warning(format!(
                "Configuration {} is missing: {}",
                path.display(),
                missing.join(", ")
            ));
            Ok(false)
        }
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        let added = migrate::migrate_config(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Configuration migrated, added: {}", added.join(", ")));
        }
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        default_editor, status
                    )))
                }
            }
            Ok(s) => Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                editor_to_use, s
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
