use core::mem;
use std::fmt::{self, Display};

use anyhow::{Context, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::{
    mutator::{Mutator, Result},
    registered::{RegisteredCompressor, find_compressor},
};

if_tracing! {
    use tracing::{Level, span};
}

/// Codecs applied one after another. Encoding runs front to back, decoding back to front.
#[derive(Debug, Clone, Default)]
pub struct CompressionPipeline {
    pipeline: Vec<RegisteredCompressor>,
}

/// On-disk form of a pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Registered codec names, in encoding order.
    pub algorithms: Vec<String>,
}

impl CompressionPipeline {
    pub const fn new() -> Self {
        Self { pipeline: vec![] }
    }

    pub fn push_algorithm(&mut self, algorithm: RegisteredCompressor) {
        self.pipeline.push(algorithm);
    }

    /// Chain this method to add multiple algorithms in a shorter way.
    pub fn with_algorithm(mut self, algorithm: RegisteredCompressor) -> Self {
        self.pipeline.push(algorithm);
        self
    }

    pub fn len(&self) -> usize {
        self.pipeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipeline.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.iter().map(|comp| comp.name)
    }

    /// Parses `"rle -> huffman"` style strings.
    pub fn parse(s: &str) -> Result<Self> {
        let parts = s.split("->").map(str::trim).filter(|part| !part.is_empty()).collect::<Vec<_>>();
        if parts.is_empty() {
            bail!("empty pipeline string");
        }
        Self::from_names(parts)
    }

    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pipeline = Self::new();
        for name in names {
            let name = name.as_ref();
            match find_compressor(name) {
                Some(comp) => pipeline.push_algorithm(comp),
                None => {
                    if_tracing! {{
                        tracing::error!(event = "unknown_algorithm", algorithm = %name, "unknown algorithm in pipeline");
                    }}
                    return Err(anyhow!("unknown algorithm {:?}", name));
                }
            }
        }
        Ok(pipeline)
    }

    pub fn try_from_bytes(data: &[u8]) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_slice(data).context("pipeline file is not valid pipeline json")?;
        Self::from_names(&config.algorithms)
    }

    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            algorithms: self.names().map(String::from).collect(),
        }
    }
}

impl Display for CompressionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(identity)");
        }
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl Mutator for CompressionPipeline {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            let pipeline_span = span!(Level::INFO, "compression_pipeline", stages = self.pipeline.len());
            let _enter = pipeline_span.enter();
        }
        match self.len() {
            0 => {
                buf.clear();
                buf.extend_from_slice(data);
                Ok(())
            }
            1 => self.pipeline[0].drive_mutation(data, buf),
            n => {
                let mut intermediate: Vec<u8> = vec![];
                // first algorithm encodes from data to buf
                self.pipeline[0].drive_mutation(data, buf)?;
                if_tracing! {
                    tracing::info!(stage = 0, out_len = buf.len(), "stage complete");
                }

                {
                    let mut ref1 = &mut *buf;
                    let mut ref2 = &mut intermediate;

                    for algo in self.pipeline.iter_mut().skip(1) {
                        algo.drive_mutation(ref1, ref2)?;
                        if_tracing! {
                            tracing::info!(out_len = ref2.len(), "stage complete");
                        }

                        // the output of this stage is the input of the next
                        mem::swap(&mut ref1, &mut ref2);
                    }
                }

                // write intermediate into buf if it was not the last buffer to get written
                if n % 2 == 0 {
                    mem::swap(buf, &mut intermediate);
                };

                Ok(())
            }
        }
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            let pipeline_span = span!(Level::INFO, "decompression_pipeline", stages = self.pipeline.len());
            let _enter = pipeline_span.enter();
        }

        match self.len() {
            0 => {
                buf.clear();
                buf.extend_from_slice(data);
                Ok(())
            }
            1 => self.pipeline[0].revert_mutation(data, buf),
            n => {
                let mut intermediate: Vec<u8> = vec![];

                // last algorithm decodes first, from data to buf
                self.pipeline[n - 1].revert_mutation(data, buf)?;
                if_tracing! {
                    tracing::info!(stage = n - 1, out_len = buf.len(), "stage complete");
                }

                {
                    let mut ref1 = &mut *buf;
                    let mut ref2 = &mut intermediate;

                    for algo in self.pipeline.iter_mut().rev().skip(1) {
                        algo.revert_mutation(ref1, ref2)?;
                        if_tracing! {
                            tracing::info!(out_len = ref2.len(), "stage complete");
                        }

                        mem::swap(&mut ref1, &mut ref2);
                    }
                }

                if n % 2 == 0 {
                    mem::swap(buf, &mut intermediate);
                }

                Ok(())
            }
        }
    }
}

/// Named pipelines selectable with `--preset`.
pub fn get_preset(name: &str) -> Option<fn() -> CompressionPipeline> {
    match name {
        "default" => Some(default_pipeline),
        "text" => Some(text_pipeline),
        "rle" => Some(rle_pipeline),
        _ => None,
    }
}

pub const PRESET_NAMES: &[&str] = &["default", "text", "rle"];

pub fn default_pipeline() -> CompressionPipeline {
    CompressionPipeline::new().with_algorithm(crate::algorithms::huffman::Huffman)
}

fn text_pipeline() -> CompressionPipeline {
    CompressionPipeline::new()
        .with_algorithm(crate::algorithms::rle::Rle)
        .with_algorithm(crate::algorithms::huffman::Huffman)
}

fn rle_pipeline() -> CompressionPipeline {
    CompressionPipeline::new().with_algorithm(crate::algorithms::rle::Rle)
}
