use {
    crate::Time,
    std::io::{self, Write},
};

/// The listing printed when no input file is given.
pub fn canonical_times() -> Vec<Time> {
    vec![
        Time::from((11, 20, 30)),
        Time::from((10, 10, 10)),
        Time::from((12, 41, 25)),
    ]
}

pub fn sort_times(times: &mut [Time]) {
    times.sort();
}

/// Index of the first element that is ordered after its successor.
pub fn first_unsorted(times: &[Time]) -> Option<usize> {
    times.windows(2).position(|pair| pair[0] > pair[1])
}

pub fn write_times(times: &[Time], out: &mut impl Write) -> io::Result<()> {
    for time in times {
        writeln!(out, "{time}")?;
    }
    out.flush()
}
