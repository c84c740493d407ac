//! Compile command handler

use std::path::Path;

use anyhow::Result;

use layertool::application::compile_file;
use layertool::presentation::json;
use layertool::presentation::output::{render_layers_text, LayersView};

use super::CommandContext;

pub fn cmd_compile(ctx: &CommandContext, file: Option<&Path>) -> Result<()> {
    let path = file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.configured_layers_file());

    let layers = compile_file(&path)?;
    tracing::info!(
        layers = layers.effective_order().len(),
        application = layers.application_selectors().len(),
        dependencies = layers.library_selectors().len(),
        "compiled {}",
        path.display()
    );

    if ctx.json {
        json::emit_event(&LayersView::from(&layers))?;
        return Ok(());
    }

    print!("{}", render_layers_text(&layers));
    Ok(())
}
