//! escon binary. A bare invocation opens the interactive console; the
//! subcommands print one-shot reports suitable for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use time::OffsetDateTime;

use escon::cat::SegmentRecord;
use escon::client::EsClient;
use escon::console;
use escon::snapshot::ClusterSnapshot;

const DEFAULT_URL: &str = "http://localhost:9200";

#[derive(Parser)]
#[command(name = "escon")]
#[command(about = "Console for watching and operating a search cluster's indices")]
struct Cli {
    /// Cluster base URL; falls back to ESCON_URL, then localhost:9200
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the enriched index table once
    Indices,
    /// Print the parsed segment table once
    Segments,
    /// Print the cluster health summary once
    Health,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let url = cli
        .url
        .or_else(|| std::env::var("ESCON_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let client = EsClient::new(&url)?;

    match cli.command {
        None => console::run(client),
        Some(Command::Indices) => print_indices(&client),
        Some(Command::Segments) => print_segments(&client),
        Some(Command::Health) => print_health(&client),
    }
}

fn print_indices(client: &EsClient) -> Result<()> {
    let indices = client.cat_indices()?;
    let segments = client.cat_segments()?;
    let snapshot = ClusterSnapshot::parse(&indices, &segments, None);
    let now = OffsetDateTime::now_utc();

    println!("{}", ClusterSnapshot::header_line());
    for view in snapshot.entries() {
        let cells = view.cells(now);
        println!(
            "{}",
            ClusterSnapshot::layout_row(&cells.each_ref().map(|cell| cell.as_str()))
        );
    }
    for note in &snapshot.diagnostics {
        eprintln!("note: {note}");
    }
    Ok(())
}

fn print_segments(client: &EsClient) -> Result<()> {
    let text = client.cat_segments()?;
    println!(
        "{:<26} {:>5} {:<6} {:<10} {:>10} {:>12} {:<9}",
        "index", "shard", "prirep", "segment", "docs", "size", "committed"
    );
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        match SegmentRecord::parse(line) {
            Ok(seg) => println!(
                "{:<26} {:>5} {:<6} {:<10} {:>10} {:>12} {:<9}",
                seg.index.as_deref().unwrap_or(""),
                seg.shard.map(|n| n.to_string()).unwrap_or_default(),
                seg.prirep.as_deref().unwrap_or(""),
                seg.segment.as_deref().unwrap_or(""),
                seg.docs_count.map(|n| n.to_string()).unwrap_or_default(),
                seg.size.map(|n| n.to_string()).unwrap_or_default(),
                seg.committed.as_deref().unwrap_or(""),
            ),
            Err(err) => eprintln!("note: {err} in `{line}`"),
        }
    }
    Ok(())
}

fn print_health(client: &EsClient) -> Result<()> {
    println!("{}", client.cat_health()?);
    Ok(())
}
