//! Init command - write the workflow as an editable config file

use std::path::Path;

use anyhow::bail;

use labelrig::output::{OperationResult, OutputMode};

use super::Context;

/// Write the effective workflow to `path`
///
/// The API key is never written.
pub fn init(ctx: &Context, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let mut config = ctx.config.clone();
    config.api.key = None;
    config.save(path)?;

    let result = OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    };
    result.render(ctx.mode);

    if ctx.mode == OutputMode::Human {
        println!("\nEdit it, then run 'labelrig preview' to check the task bodies.");
    }
    Ok(())
}
