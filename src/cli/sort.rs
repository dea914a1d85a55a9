use anyhow::Result;

use crate::{
    cli::{SortArgs, read_input, write_output},
    text::sort_lines,
};

pub fn sort(args: SortArgs) -> Result<()> {
    let text = read_input(&args.io.input)?;
    let mut sorted = Vec::new();
    sort_lines(&text, &mut sorted);
    write_output(&args.io.output, &sorted)
}
