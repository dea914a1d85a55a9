use std::fs;

use anyhow::{Context, Result, anyhow};

use crate::{
    algorithms::pipeline::{CompressionPipeline, PRESET_NAMES, default_pipeline, get_preset},
    cli::{PipelineCommand, PipelineSelection, read_input},
    registered::ALL_COMPRESSORS,
};

pub fn build_pipeline(selection: PipelineSelection) -> Result<CompressionPipeline> {
    let pipeline = match selection {
        PipelineSelection::Inline(string) => {
            CompressionPipeline::parse(&string).with_context(|| format!("invalid pipeline {:?}", string))?
        }
        PipelineSelection::FromFile(path) => {
            let data = read_input(&path)?;
            CompressionPipeline::try_from_bytes(&data).with_context(|| format!("invalid pipeline file {}", path.display()))?
        }
        PipelineSelection::Preset(preset_name) => match get_preset(&preset_name) {
            Some(t) => t(),
            None => {
                if_tracing! {{
                    tracing::error!(event = "unknown_preset", preset = %preset_name, "unknown preset");
                }}
                return Err(anyhow!(
                    "unknown preset {:?}, expected one of: {}",
                    preset_name,
                    PRESET_NAMES.join(", ")
                ));
            }
        },
        PipelineSelection::Default => default_pipeline(),
    };

    if_tracing! {
        tracing::debug!(event = "pipeline_selected", pipeline = %pipeline, "pipeline selected");
    }
    Ok(pipeline)
}

pub fn pipeline(args: PipelineCommand) -> Result<()> {
    match args {
        PipelineCommand::List { detailed } => {
            for algo in ALL_COMPRESSORS {
                if detailed && let Some(desc) = algo.short_description {
                    println!("Name: {}\nDescription: {}\n", algo.name, desc);
                } else {
                    println!("{}", algo.name);
                }
            }
            Ok(())
        }
        PipelineCommand::Save { pipeline, output } => {
            let parsed = CompressionPipeline::parse(&pipeline).with_context(|| format!("invalid pipeline {:?}", pipeline))?;
            let json = serde_json::to_string_pretty(&parsed.to_config())?;
            fs::write(&output, json).with_context(|| format!("failed to write pipeline file {}", output.display()))?;
            if_tracing! {
                tracing::info!(event = "pipeline_saved", pipeline = %parsed, output = %output.display(), "pipeline saved");
            }
            Ok(())
        }
    }
}
