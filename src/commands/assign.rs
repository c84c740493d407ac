//! Assign command handler

use std::path::Path;

use anyhow::{bail, Result};

use layertool::application::{compile_file, AssignRequest, AssignUseCase};
use layertool::domain::entities::{Layers, Library, LibraryCoordinates};
use layertool::domain::policies::StandardLayers;
use layertool::presentation::json;
use layertool::presentation::output::render_assignments_text;

use super::CommandContext;

pub struct AssignArgs<'a> {
    pub layers: Option<&'a Path>,
    pub resources: Vec<String>,
    pub libraries: Vec<String>,
    pub modules: Vec<String>,
}

pub fn cmd_assign(ctx: &CommandContext, args: AssignArgs<'_>) -> Result<()> {
    if args.resources.is_empty() && args.libraries.is_empty() && args.modules.is_empty() {
        bail!("nothing to assign: pass --resource, --library or --module");
    }

    let libraries = args
        .libraries
        .iter()
        .map(|gav| library(gav, false))
        .chain(args.modules.iter().map(|gav| library(gav, true)))
        .collect();
    let request = AssignRequest {
        resources: args.resources,
        libraries,
    };

    let layers = resolve_layers(ctx, args.layers)?;
    let assignments = AssignUseCase::new(layers.as_ref()).assign(&request)?;

    if ctx.json {
        json::emit(serde_json::json!({ "assignments": assignments }))?;
        return Ok(());
    }

    print!("{}", render_assignments_text(&assignments));
    Ok(())
}

fn library(gav: &str, local: bool) -> Library {
    let coordinates: LibraryCoordinates = gav.parse().unwrap_or_else(|never| match never {});
    Library::from_coordinates(coordinates).local(local)
}

/// An explicit descriptor always wins; otherwise the configured one, falling back to the
/// standard layers when it does not exist and fallback is enabled.
fn resolve_layers(ctx: &CommandContext, explicit: Option<&Path>) -> Result<Box<dyn Layers>> {
    if let Some(path) = explicit {
        return Ok(Box::new(compile_file(path)?));
    }

    let path = ctx.configured_layers_file();
    if !path.exists() && ctx.config.layers.standard_fallback {
        tracing::info!(
            "{} not found, using standard layers",
            path.display()
        );
        return Ok(Box::new(StandardLayers::default()));
    }

    Ok(Box::new(compile_file(&path)?))
}
