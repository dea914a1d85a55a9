use anyhow::Result;

use crate::{
    cli::{SearchArgs, read_input},
    text::{render_matches, search_lines},
};

pub fn search(args: SearchArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let matches = search_lines(&text, args.term.as_bytes());
    print!("{}", render_matches(&matches));
    Ok(())
}
