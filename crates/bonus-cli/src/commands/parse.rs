//! Parse command - extract bonus terms from one description.

use std::io::{self, Read};

use clap::Args;

use super::{build_parser, load_config};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Description text ("-" reads it from stdin)
    #[arg(required = true)]
    description: String,

    /// Currency code of the row (e.g. RUB, KZT)
    #[arg(short = 'C', long)]
    currency: String,

    /// Keep the slot name in the bet text instead of cutting it off
    #[arg(long)]
    keep_slot_context: bool,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = build_parser(&config, args.keep_slot_context);

    let description = if args.description == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.description
    };

    let result = parser.parse(&description, &args.currency);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
