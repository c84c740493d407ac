//! Schema command handler

use anyhow::Result;

use layertool::infrastructure::layers_schema;
use layertool::presentation::json;
use layertool::presentation::output::{render_schema_text, SchemaView};

use super::CommandContext;

pub fn cmd_schema(ctx: &CommandContext) -> Result<()> {
    let schema = layers_schema()?;

    if ctx.json {
        json::emit_event(&SchemaView::from(schema))?;
        return Ok(());
    }

    print!("{}", render_schema_text(schema));
    Ok(())
}
