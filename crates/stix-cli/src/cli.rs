use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stix",
    about = "Build STIX 2.1 objects and TAXII 2.1 collection registries",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the collections document for a registry config
    Collections(CollectionsArgs),
    /// Print a freshly constructed object of the given type
    New(NewArgs),
    /// Print a collection membership record
    Record(RecordArgs),
    /// Decode a STIX object from a JSON file and print a summary
    Decode(DecodeArgs),
    /// List the object types this tool can build
    Types,
}

#[derive(Args)]
pub struct CollectionsArgs {
    /// Registry config file (TOML)
    #[arg(short, long)]
    pub config: PathBuf,
    /// Include disabled and hidden collections
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct NewArgs {
    /// Object type, e.g. `grouping` or `observed-data`
    pub object_type: String,
}

#[derive(Args)]
pub struct RecordArgs {
    pub collection_id: String,
    pub stix_id: String,
}

#[derive(Args)]
pub struct DecodeArgs {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_collections_all() {
        let cli = Cli::try_parse_from(["stix", "collections", "--config", "x.toml", "--all"]).unwrap();
        if let Command::Collections(args) = cli.command {
            assert!(args.all);
            assert_eq!(args.config, PathBuf::from("x.toml"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_collections_visible_only_by_default() {
        let cli = Cli::try_parse_from(["stix", "collections", "-c", "x.toml"]).unwrap();
        if let Command::Collections(args) = cli.command {
            assert!(!args.all);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn collections_requires_config() {
        assert!(Cli::try_parse_from(["stix", "collections"]).is_err());
    }

    #[test]
    fn parse_new() {
        let cli = Cli::try_parse_from(["stix", "new", "observed-data"]).unwrap();
        if let Command::New(args) = cli.command {
            assert_eq!(args.object_type, "observed-data");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_record() {
        let cli = Cli::try_parse_from([
            "stix",
            "record",
            "91a7b528-80eb-42ed-a74d-c6fbd5a26116",
            "indicator--26ffb872-1dd9-446e-b6f5-d58527e5b5d2",
        ])
        .unwrap();
        if let Command::Record(args) = cli.command {
            assert_eq!(args.collection_id, "91a7b528-80eb-42ed-a74d-c6fbd5a26116");
            assert_eq!(args.stix_id, "indicator--26ffb872-1dd9-446e-b6f5-d58527e5b5d2");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn record_requires_both_ids() {
        assert!(Cli::try_parse_from(["stix", "record", "only-one"]).is_err());
    }

    #[test]
    fn parse_decode() {
        let cli = Cli::try_parse_from(["stix", "decode", "bundle/grouping.json"]).unwrap();
        if let Command::Decode(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("bundle/grouping.json"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_types() {
        let cli = Cli::try_parse_from(["stix", "types"]).unwrap();
        assert!(matches!(cli.command, Command::Types));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stix", "new", "grouping", "--pretty", "-v"]).unwrap();
        assert!(cli.pretty);
        assert!(cli.verbose);
    }

    #[test]
    fn global_flags_default_off() {
        let cli = Cli::try_parse_from(["stix", "types"]).unwrap();
        assert!(!cli.pretty);
        assert!(!cli.verbose);
    }
}
