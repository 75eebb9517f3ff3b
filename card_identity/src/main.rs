//! Card Identity - build canonical card faces from a Scryfall snapshot
//!
//! Reads a bulk-data snapshot and an optional directory of lookup tables,
//! assigns stable identities against the legacy id cache and writes the
//! linked faces as JSON.

use card_identity::{
    build, import_cache, init_schema, load_cache, load_lookup_dir, record_identities, write_json,
    BuildContext, BuildError, Envelope, LegacyIdCache, Result, CANONICAL_LANGUAGE,
};
use clap::Parser;
use rusqlite::Connection;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Stable per-face identities and sibling links for MTG printings
#[derive(Parser, Debug)]
#[command(name = "card_identity")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the Scryfall bulk-data JSON snapshot
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Directory holding the lookup table JSON files
    #[arg(short, long)]
    lookups: Option<PathBuf>,

    /// Path to the SQLite legacy id cache
    #[arg(long, default_value_t = default_cache_path())]
    legacy_cache: String,

    /// JSON seed of previously published identities to import into the cache
    #[arg(long)]
    import_legacy: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not record newly assigned identities in the cache
    #[arg(long, default_value_t = false)]
    no_record: bool,

    /// Language whose printings count as rebalance originals
    #[arg(long, default_value = CANONICAL_LANGUAGE)]
    canonical_language: String,
}

/// Returns the default cache path: ~/.local/share/card_identity/legacy_ids.db
fn default_cache_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("card_identity")
        .join("legacy_ids.db")
        .to_string_lossy()
        .to_string()
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("Build failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    log::info!("Starting card_identity...");

    let snapshot_path = args.snapshot.clone();
    let snapshot =
        tokio::task::spawn_blocking(move || mtg_common::scryfall::load_bulk(&snapshot_path));

    let mut ctx = match &args.lookups {
        Some(dir) => load_lookup_dir(dir).await?.into_context(),
        None => {
            log::info!("No lookup directory given, joining nothing");
            BuildContext::new()
        }
    };
    ctx.options.canonical_language = args.canonical_language.clone();

    let printings = snapshot.await??;
    log::info!("Loaded {} printings from {}", printings.len(), args.snapshot.display());

    let mut conn = open_cache(&args.legacy_cache)?;
    if let Some(seed) = &args.import_legacy {
        let json = std::fs::read_to_string(seed)?;
        let cache = LegacyIdCache::from_json_str(&json).map_err(|source| BuildError::Lookup {
            path: seed.clone(),
            source,
        })?;
        import_cache(&mut conn, &cache)?;
    }
    ctx.legacy_ids = load_cache(&conn)?;

    let cards = build(&printings, &ctx)?;

    if args.no_record {
        log::info!("Skipping legacy cache update (--no-record)");
    } else {
        record_identities(&mut conn, &cards)?;
    }

    let envelope = Envelope::new(&cards);
    match &args.output {
        Some(path) => {
            write_json(BufWriter::new(File::create(path)?), &envelope)?;
            log::info!("Wrote {} faces to {}", cards.len(), path.display());
        }
        None => write_json(io::stdout().lock(), &envelope)?,
    }

    Ok(())
}

/// Open the cache database, creating its directory and schema if needed
fn open_cache(path: &str) -> Result<Connection> {
    let db_path = PathBuf::from(path);
    log::info!("Legacy cache path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            log::info!("Created directory: {}", parent.display());
        }
    }

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}
