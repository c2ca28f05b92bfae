use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modelts_core::{File, WriteResult};
use modelts_manifest::{CONFIG_FILE, CONFIG_TEMPLATE};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the configuration
    #[arg(default_value = CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        match self.write()? {
            WriteResult::Skipped => {
                eprintln!(
                    "{} already exists (use --force to overwrite)",
                    self.path.display()
                );
                std::process::exit(1);
            }
            WriteResult::Written | WriteResult::Unchanged => {
                println!("Created {}", self.path.display());
            }
        }
        Ok(())
    }

    fn write(&self) -> Result<WriteResult> {
        let file = File::new(&self.path, CONFIG_TEMPLATE);
        let file = if self.force { file } else { file.if_missing() };
        file.write()
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use modelts_manifest::ModeltsToml;
    use tempfile::TempDir;

    use super::*;

    fn init(path: PathBuf, force: bool) -> InitCommand {
        InitCommand { path, force }
    }

    #[test]
    fn test_init_writes_parseable_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        assert_eq!(init(path.clone(), false).write().unwrap(), WriteResult::Written);
        let toml = ModeltsToml::open(&path).unwrap();
        assert!(toml.config().declare_namespace);
    }

    #[test]
    fn test_init_keeps_existing_config_unless_forced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "declare_namespace = false\n").unwrap();

        assert_eq!(init(path.clone(), false).write().unwrap(), WriteResult::Skipped);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "declare_namespace = false\n"
        );

        assert_eq!(init(path.clone(), true).write().unwrap(), WriteResult::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
