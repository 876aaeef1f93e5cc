use {
    frontend::Listing,
    model::report,
    rstest::rstest,
    rstest_reuse::{apply, template},
    std::path::PathBuf,
};

#[template]
#[rstest]
fn listings(#[files("sample_listings/*.txt")] path: PathBuf) {}

#[apply(listings)]
fn sort_listing(path: PathBuf) {
    let sample = SampleListing::from(path);
    let mut times = sample.listing.times.clone();
    report::sort_times(&mut times);
    let mut output = Vec::new();
    report::write_times(&times, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), sample.expected_output);
}

#[apply(listings)]
fn sorting_is_idempotent(path: PathBuf) {
    let sample = SampleListing::from(path);
    let mut once = sample.listing.times.clone();
    report::sort_times(&mut once);
    let mut twice = once.clone();
    report::sort_times(&mut twice);
    assert_eq!(once, twice);
    assert_eq!(report::first_unsorted(&once), None);
}

#[apply(listings)]
fn sorting_preserves_entries(path: PathBuf) {
    let sample = SampleListing::from(path);
    let mut sorted = sample.listing.times.clone();
    report::sort_times(&mut sorted);
    let mut original = sample.listing.times;
    for time in &sorted {
        let index = original
            .iter()
            .position(|t| t == time)
            .unwrap_or_else(|| panic!("{time} appeared out of nowhere"));
        original.swap_remove(index);
    }
    assert!(original.is_empty(), "entries lost by sorting: {original:?}");
}

struct SampleListing {
    listing: Listing,
    expected_output: String,
}

impl From<PathBuf> for SampleListing {
    fn from(mut path: PathBuf) -> Self {
        let src = std::fs::read_to_string(&path).unwrap();
        let listing = Listing::try_from(&*src).unwrap();

        path.set_extension("stdout");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });

        SampleListing {
            listing,
            expected_output,
        }
    }
}
