//! getwire
//!
//! Inspect row lookups on the wire: encode a request for a given server
//! version, or decode a captured reply.

use bytes::Bytes;
use clap::{Parser, Subcommand};
use regionwire::{
    CodecConfig, GetCodec, GetRequest, GetResult, RegionInfo, Result, ServerVersion,
};
use tracing_subscriber::{fmt, EnvFilter};

/// getwire CLI
#[derive(Parser, Debug)]
#[command(name = "getwire")]
#[command(about = "Encode row lookups and decode their replies")]
#[command(version)]
struct Args {
    /// Maximum cell block size accepted when decoding, in MB
    #[arg(long, default_value = "16")]
    max_cell_block_mb: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a lookup and print its bytes as hex
    Encode {
        /// Table name
        table: String,

        /// Row key
        row: String,

        /// Region name (defaults to "<table>,,1")
        #[arg(short, long)]
        region: Option<String>,

        /// Column family
        #[arg(short, long)]
        family: Option<String>,

        /// Column qualifier (repeatable, requires --family)
        #[arg(short, long, requires = "family")]
        qualifier: Vec<String>,

        /// Versions per cell
        #[arg(short = 'n', long, default_value = "1")]
        max_versions: i32,

        /// Server capability tag
        #[arg(short = 'v', long, default_value = "95")]
        server_version: u8,

        /// Existence check instead of a lookup
        #[arg(long)]
        exists: bool,
    },

    /// Decode a hex-encoded reply
    Decode {
        /// Reply bytes as hex
        hex: String,

        /// Length of the trailing cell block in bytes
        #[arg(short, long, default_value = "0")]
        cell_block_len: usize,

        /// Decode as the reply to an existence check
        #[arg(long)]
        exists: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,regionwire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = CodecConfig::builder()
        .max_cell_block_size(args.max_cell_block_mb * 1024 * 1024)
        .build();
    let codec = GetCodec::new(config);

    if let Err(e) = run(&codec, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(codec: &GetCodec, command: Commands) -> Result<()> {
    match command {
        Commands::Encode {
            table,
            row,
            region,
            family,
            qualifier,
            max_versions,
            server_version,
            exists,
        } => {
            let region_name = region.unwrap_or_else(|| format!("{},,1", table));
            let region = RegionInfo::new(table.clone(), region_name);

            let mut request = if exists {
                GetRequest::exists(table, row)?
            } else {
                GetRequest::new(table, row)?
            };
            if let Some(family) = family {
                request = request.set_family(family)?;
                if !qualifier.is_empty() {
                    request = request.set_qualifiers(qualifier)?;
                }
            }
            let request = request.set_max_versions(max_versions)?;

            let outbound = codec.encode(&request, &region, ServerVersion(server_version))?;
            let bytes = outbound.to_bytes();
            println!("method: {}", String::from_utf8_lossy(outbound.method));
            println!("format: {:?}", outbound.wire_format());
            println!("size:   {}", bytes.len());
            println!("{}", hex::encode(&bytes));
        }
        Commands::Decode {
            hex: input,
            cell_block_len,
            exists,
        } => {
            let raw = hex::decode(input.trim()).map_err(|e| {
                regionwire::WireError::InvalidArgument(format!("bad hex input: {}", e))
            })?;
            let mut buf = Bytes::from(raw);
            // Only the request kind matters for decoding.
            let request = if exists {
                GetRequest::exists("-", "")?
            } else {
                GetRequest::new("-", "")?
            };
            match codec.decode(&request, &mut buf, cell_block_len)? {
                GetResult::Exists(found) => println!("exists: {}", found),
                GetResult::Row(cells) => {
                    println!("{} cells", cells.len());
                    for cell in cells {
                        println!(
                            "{:?}/{:?}:{:?} @{} = {:?}",
                            cell.key, cell.family, cell.qualifier, cell.timestamp, cell.value
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
