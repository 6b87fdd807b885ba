//! Preview command - print task bodies without sending them

use labelrig::core::services::{gate_issues, task_requests};
use labelrig::output::PreviewResult;

use super::Context;

/// Print the body of every task a run would submit
pub fn preview(ctx: &Context) -> anyhow::Result<()> {
    let workflow = &ctx.config.workflow;
    let tasks = task_requests(workflow);
    let issues = gate_issues(workflow);

    PreviewResult::new(&tasks, &issues).render(ctx.mode);
    Ok(())
}
