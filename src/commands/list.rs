//! `npm-push list`

use crate::core::context::ProjectContext;
use crate::core::error::PushResult;
use crate::ui::report;

/// Print the resolved workspace, as text or JSON
pub fn run_list(ctx: &ProjectContext, json: bool) -> PushResult<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(&ctx.workspace)?);
  } else {
    report::print_workspace(&ctx.translator, &ctx.workspace);
  }
  Ok(())
}
