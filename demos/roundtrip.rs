//! Read an SVG file, report skipped shape lines, write the normalized document.
//!
//! Run with: cargo run --example roundtrip -- input.svg [output.svg]
//! Set RUST_LOG=svgshapes=debug (and build with `--features tracing`) for parser logs.

use camino::Utf8PathBuf;
use miette::IntoDiagnostic;
use svgshapes::{ParseOptions, ShapeStore, SkipPolicy};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).map(Utf8PathBuf::from);
    let input = args
        .next()
        .ok_or_else(|| miette::miette!("usage: roundtrip <input.svg> [output.svg]"))?;
    let output = args.next();

    let options = ParseOptions::new().with_skips(SkipPolicy::Collect);
    let parsed = ShapeStore::load_with(&input, &options)?;

    for skipped in parsed.skipped {
        eprintln!("{:?}", miette::Report::new(skipped));
    }
    eprintln!("{} shapes read from {}", parsed.store.len(), input);

    match output {
        Some(path) => parsed.store.save(&path)?,
        None => parsed.store.write_to(std::io::stdout().lock()).into_diagnostic()?,
    }
    Ok(())
}
