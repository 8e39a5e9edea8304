use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_init;
use crate::presentation::views::InitView;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let ws = ctx.workspace()?;
    let report = ws.init()?;

    let vm = present_init(&report);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &InitView::new(&vm))
}
