use {
    crate::common::{debug_println, DEBUG},
    clap::Parser,
    frontend::Listing,
    model::report,
    std::{path::PathBuf, sync::atomic::Ordering},
};

/// Sort times of the form H:M:S in lexicographic order
#[derive(Debug, Parser)]
pub struct Cli {
    /// Listing of H:M:S entries [leave unspecified for the built-in sample]
    input_path: Option<PathBuf>,

    /// Output file for the sorted listing [leave unspecified for stdout]
    #[arg(short)]
    output_path: Option<PathBuf>,

    /// Verify the listing is already sorted instead of sorting it
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let mut times = match cli.input_path {
        Some(input_path) => {
            let src = std::fs::read_to_string(input_path)?;
            Listing::try_from(&*src)?.times
        }
        None => report::canonical_times(),
    };
    debug_println!("read {} times: {times:#?}", times.len());
    if cli.check {
        if let Some(index) = report::first_unsorted(&times) {
            anyhow::bail!(
                "entry {} ({}) is ordered after entry {} ({})",
                index + 1,
                times[index],
                index + 2,
                times[index + 1],
            );
        }
    } else {
        report::sort_times(&mut times);
        debug_println!("sorted: {times:#?}");
    }
    if let Some(output_path) = cli.output_path {
        let mut file = std::fs::File::create(output_path)?;
        report::write_times(&times, &mut file)?;
    } else {
        report::write_times(&times, &mut std::io::stdout().lock())?;
    }
    Ok(())
}
