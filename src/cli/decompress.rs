if_tracing! {
    use voxell_timer::time_fn;
}

use anyhow::{Context, Result};

use crate::{
    cli::{CompressArgs, pipeline, read_input, write_output},
    mutator::Mutator,
};

pub fn decompress(args: CompressArgs) -> Result<()> {
    let input_path = &args.io.input;
    let output_path = &args.io.output;
    let mut pipeline = pipeline::build_pipeline(args.pipeline.selection())?;

    let compressed_data = read_input(input_path)?;
    let mut decompressed_data = Vec::new();
    if_tracing! {{
        let (res, dur) = time_fn(|| pipeline.revert_mutation(&compressed_data, &mut decompressed_data));
        res.with_context(|| format!("failed to decompress {} with {}", input_path.display(), pipeline))?;
        tracing::info!(event = "decompress_complete", input = %input_path.display(), output = %output_path.display(), elapsed_us = %dur.as_micros(), decompressed_len = decompressed_data.len(), "decompress finished");
    }}
    if_not_tracing! {{
        pipeline
            .revert_mutation(&compressed_data, &mut decompressed_data)
            .with_context(|| format!("failed to decompress {} with {}", input_path.display(), pipeline))?;
    }}
    write_output(output_path, &decompressed_data)
}
