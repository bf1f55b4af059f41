use anyhow::Result;
use extractor::{Console, BANNER};
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{BANNER}")?;

    let mut console = Console::new(out);
    console.run(io::stdin().lock())?;
    tracing::info!("session closed");
    Ok(())
}
