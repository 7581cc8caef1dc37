use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use repack::repackage_json;

#[derive(Parser)]
#[clap(version = "0.1")]
struct Opts {
    /// JSON file holding the GitHub push-event payload
    #[clap(short, long, parse(from_os_str))]
    payload: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();
    let payload_file = File::open(&opts.payload)
        .with_context(|| format!("couldn't open {}:", opts.payload.display()))?;
    let payload: serde_json::Value = serde_json::from_reader(BufReader::new(payload_file))
        .context("couldn't parse payload file")?;

    debug!("repackaging payload from {}", opts.payload.display());

    let notification = repackage_json(&payload);
    println!("{}", serde_json::to_string(&notification)?);

    Ok(())
}
