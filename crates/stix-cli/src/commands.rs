use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use stix_objects::OBJECT_TYPES;
use taxii_resources::{CollectionRecord, RegistryConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let pretty = cli.pretty;
    match cli.command {
        Command::Collections(args) => cmd_collections(args, pretty),
        Command::New(args) => cmd_new(args, pretty),
        Command::Record(args) => cmd_record(args, pretty),
        Command::Decode(args) => cmd_decode(args),
        Command::Types => {
            for object_type in OBJECT_TYPES {
                println!("{}", object_type.cyan());
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_collections(args: CollectionsArgs, pretty: bool) -> anyhow::Result<()> {
    let config = RegistryConfig::from_file(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let mut registry = config.build();
    if !args.all {
        registry = registry.discovery_view();
    }
    let json = if pretty {
        registry.to_json_pretty()?
    } else {
        registry.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn cmd_new(args: NewArgs, pretty: bool) -> anyhow::Result<()> {
    let obj = stix_objects::new_object(&args.object_type)?;
    print_json(&obj, pretty)
}

fn cmd_record(args: RecordArgs, pretty: bool) -> anyhow::Result<()> {
    stix_types::StixId::parse(&args.stix_id)?;
    let record = CollectionRecord::new(args.collection_id, args.stix_id);
    print_json(&record, pretty)
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let obj = stix_objects::decode(&text)?;
    let id = obj.id().map(|id| id.to_string()).unwrap_or_else(|| "-".into());
    println!("{} {} {}", "✓".green().bold(), obj.object_type().cyan(), id.yellow());
    Ok(())
}
