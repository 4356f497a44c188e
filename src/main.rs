//! Sorts a fixed example input and prints it before and after.

use std::io::{self, Write};
use std::time::Instant;

use merge_sort::listing::write_listing;

fn main() -> io::Result<()> {
    // Logs go to stderr so stdout only carries the listings. Defaults to info.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();

    let mut arr = vec![38, 27, 43, 3, 9, 82, 10];

    let span = tracing::info_span!("demo", len = arr.len());
    let _guard = span.enter();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Original array: ")?;
    write_listing(&mut out, &arr)?;

    let start = Instant::now();
    merge_sort::sort(&mut arr);
    tracing::debug!(elapsed = ?start.elapsed(), "sorted");

    writeln!(out, "Sorted array: ")?;
    write_listing(&mut out, &arr)?;

    out.flush()
}
