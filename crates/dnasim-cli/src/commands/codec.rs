use std::io::{self, IsTerminal, Read};

use dnasim_core::{decode, to_binary_string, DnaSimError, Encoding, SymbolMapping};

use crate::app::AppContext;
use crate::cli::{BinaryArgs, DecodeArgs, EncodeArgs};
use crate::output::{print_encoding, print_mapping_errors};

pub fn parse_mapping(raw: Option<&str>) -> anyhow::Result<SymbolMapping> {
    match raw {
        Some(raw) => Ok(raw.parse::<SymbolMapping>()?),
        None => Ok(SymbolMapping::default()),
    }
}

pub fn handle_encode(ctx: &AppContext, args: &EncodeArgs) -> anyhow::Result<()> {
    let mapping = parse_mapping(args.mapping.as_deref())?;
    let encoding = Encoding::compute(&args.text, &mapping);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&encoding)?);
    } else {
        print_encoding(&encoding, ctx.quiet());
        print_mapping_errors(&encoding);
    }

    if !encoding.valid {
        return Err(DnaSimError::InvalidInput(
            "Unique 2-bit binary values required per base".to_string(),
        )
        .into());
    }
    Ok(())
}

pub fn handle_binary(args: &BinaryArgs) -> anyhow::Result<()> {
    println!("{}", to_binary_string(&args.text));
    Ok(())
}

pub fn handle_decode(args: &DecodeArgs) -> anyhow::Result<()> {
    let input = match &args.binary {
        Some(value) => value.clone(),
        None => read_stdin()?,
    };
    println!("{}", decode(&input));
    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        return Err(DnaSimError::InvalidInput(
            "No binary input; pass it as an argument or pipe it via stdin".to_string(),
        )
        .into());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}
