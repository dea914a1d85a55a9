use anyhow::{Context, Result};

use crate::{
    algorithms::cipher::build_cipher,
    cli::{CipherArgs, read_input, write_output},
    mutator::Mutator,
};

pub fn encrypt(args: CipherArgs) -> Result<()> {
    let mut cipher = build_cipher(args.cipher, &args.key)?;
    let plain = read_input(&args.io.input)?;
    let mut out = Vec::with_capacity(plain.len());
    cipher
        .drive_mutation(&plain, &mut out)
        .with_context(|| format!("failed to encrypt {}", args.io.input.display()))?;
    write_output(&args.io.output, &out)
}

pub fn decrypt(args: CipherArgs) -> Result<()> {
    let mut cipher = build_cipher(args.cipher, &args.key)?;
    let encrypted = read_input(&args.io.input)?;
    let mut out = Vec::with_capacity(encrypted.len());
    cipher
        .revert_mutation(&encrypted, &mut out)
        .with_context(|| format!("failed to decrypt {}", args.io.input.display()))?;
    write_output(&args.io.output, &out)
}
