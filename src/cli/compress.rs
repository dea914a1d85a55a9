if_tracing! {
    use voxell_timer::time_fn;
}

use anyhow::{Context, Result};

use crate::{
    cli::{CompressArgs, pipeline, read_input, write_output},
    mutator::Mutator,
};

pub fn compress(args: CompressArgs) -> Result<()> {
    let input_path = &args.io.input;
    let output_path = &args.io.output;
    let mut pipeline = pipeline::build_pipeline(args.pipeline.selection())?;

    let input_data = read_input(input_path)?;
    let mut compressed_data = Vec::new();
    if_tracing! {{
        let (res, dur) = time_fn(|| pipeline.drive_mutation(&input_data, &mut compressed_data));
        res.with_context(|| format!("failed to compress {} with {}", input_path.display(), pipeline))?;
        tracing::info!(event = "compress_complete", input = %input_path.display(), output = %output_path.display(), elapsed_us = %dur.as_micros(), original_len = input_data.len(), compressed_len = compressed_data.len(), "compress finished");
    }}
    if_not_tracing! {{
        pipeline
            .drive_mutation(&input_data, &mut compressed_data)
            .with_context(|| format!("failed to compress {} with {}", input_path.display(), pipeline))?;
    }}
    write_output(output_path, &compressed_data)
}
