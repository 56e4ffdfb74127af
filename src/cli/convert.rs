//! Convert command implementation.
//!
//! Hex in, HSL out; or `h,s,l` in, hex out.

use clap::Args;

use crate::error::{HubError, Result};
use crate::types::{Colour, Hsl};

/// Convert between hex and HSL
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// A hex colour ("#3498DB") or an HSL triplet ("204,70,53")
    #[arg(required = true, allow_hyphen_values = true)]
    pub value: String,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    println!("{}", convert(&args.value)?);
    Ok(())
}

/// Convert one value, returning the other representation.
pub fn convert(value: &str) -> Result<String> {
    let trimmed = value.trim();

    if trimmed.contains(',') {
        let hsl: Hsl = trimmed.parse()?;
        return Ok(hsl.to_colour().to_string());
    }

    match Colour::from_hex(trimmed) {
        Ok(colour) => Ok(colour.to_hsl().to_string()),
        Err(err) if trimmed.starts_with('#') => Err(err),
        Err(_) => Err(HubError::Parse {
            message: format!("Cannot convert {:?}", value),
            help: Some("Pass a hex colour like #3498DB or an HSL triplet like 204,70,53".to_string()),
        }),
    }
}
