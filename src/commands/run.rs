//! Run commands - create the project, the batch and the tasks
//!
//! `run` does all three stages; `project`, `batch` and `tasks` do one each.

use anyhow::Context as _;
use log::debug;

use labelrig::adapters::ScaleClient;
use labelrig::core::services::pipeline::{self, RunObserver};
use labelrig::error::RunError;
use labelrig::output::{HumanReporter, OutputMode, RunReport};

use super::Context;

/// Build the HTTP client from flags, environment and config
fn connect(ctx: &Context) -> anyhow::Result<ScaleClient> {
    let api_key = ctx.config.resolve_api_key(ctx.api_key.as_deref())?;
    let client = ScaleClient::builder(api_key)
        .base_url(ctx.config.resolve_base_url(ctx.base_url.as_deref()))
        .timeout(ctx.config.api.request_timeout())
        .build()
        .context("failed to build HTTP client")?;
    debug!("Using API at {}", client.base_url());
    Ok(client)
}

/// Drive a stage with the reporter matching the output mode
///
/// JSON mode prints whatever was collected, even when the stage failed.
fn with_reporter<F>(mode: OutputMode, stage: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn RunObserver) -> Result<(), RunError>,
{
    match mode {
        OutputMode::Human => Ok(stage(&mut HumanReporter)?),
        OutputMode::Json => {
            let mut report = RunReport::new();
            let result = stage(&mut report);
            report.render();
            Ok(result?)
        },
    }
}

/// All three stages
pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let client = connect(ctx)?;
    with_reporter(ctx.mode, |observer| {
        pipeline::run(&client, &ctx.config.workflow, observer).map(drop)
    })
}

/// Stage 1 only
pub fn project(ctx: &Context) -> anyhow::Result<()> {
    let client = connect(ctx)?;
    with_reporter(ctx.mode, |observer| {
        let project = pipeline::create_project(&client, &ctx.config.workflow)?;
        observer.project_created(&project);
        Ok(())
    })
}

/// Stage 2 only
pub fn batch(ctx: &Context) -> anyhow::Result<()> {
    let client = connect(ctx)?;
    with_reporter(ctx.mode, |observer| {
        let batch = pipeline::create_batch(&client, &ctx.config.workflow)?;
        observer.batch_created(&batch);
        Ok(())
    })
}

/// Stage 3 only
pub fn tasks(ctx: &Context) -> anyhow::Result<()> {
    let client = connect(ctx)?;
    with_reporter(ctx.mode, |observer| {
        pipeline::submit_tasks(&client, &ctx.config.workflow, observer).map(drop)
    })
}
