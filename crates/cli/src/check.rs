use anyhow::{Context, Result};
use form_observer::{FieldProvider, ObserverContext, ValidationObserver};
use form_observer_common::{FormConfig, ObserverConfig};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::display;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    pub json: bool,
    pub touch: bool,
}

pub struct CheckReport {
    pub valid: bool,
    pub context: ObserverContext,
    pub output: String,
}

/// Load a form definition, validate every field and render the result
pub async fn run(path: &Path, config: &ObserverConfig, options: &CheckOptions) -> Result<CheckReport> {
    let form = FormConfig::from_file(path)
        .with_context(|| format!("Failed to load form definition {}", path.display()))?;

    let observer = ValidationObserver::with_config(config);
    for field_config in &form.fields {
        let field = FieldProvider::from_config(field_config)?;
        if options.touch {
            field.touch().await;
        }
        observer.subscribe(Arc::new(field)).await;
    }
    info!("Loaded {} field(s) from {}", form.fields.len(), path.display());

    let valid = observer.validate().await?;
    let context = observer.context().await;

    let output = if options.json {
        display::json(&context)?
    } else {
        display::text(&context)
    };

    Ok(CheckReport {
        valid,
        context,
        output,
    })
}
