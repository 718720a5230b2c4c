//! Write a starter config file

use std::path::Path;

use stacks::config::LibraryConfig;
use stacks::output::{OperationResult, OutputMode};

/// Write the sample catalog to `path`
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    LibraryConfig::sample().save_to(path)?;
    log::info!("Wrote sample catalog to {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
