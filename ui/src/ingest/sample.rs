//! Randomized demo dataset for the sample-data button.

use std::fmt::Write;

use rand::seq::SliceRandom;
use rand::Rng;

const SEGMENT_NAMES: &[&str] = &[
    "North", "South", "East", "West", "Online", "Retail", "Wholesale", "Export", "Partner",
    "Direct",
];

const DIVISION_NAMES: &[&str] = &["hardware", "software", "services"];

/// A small random dataset that always passes validation: 5–8 rows,
/// positive integer widths, signed heights, at most three categories.
pub fn sample_csv() -> String {
    let mut rng = rand::thread_rng();

    let mut names = SEGMENT_NAMES.to_vec();
    names.shuffle(&mut rng);
    let rows = rng.gen_range(5..=8);

    let mut out = String::from("segment,share,growth,division\n");
    for name in names.into_iter().take(rows) {
        let width = rng.gen_range(5..=40);
        let height = rng.gen_range(-25..=60);
        let division = DIVISION_NAMES.choose(&mut rng).copied().unwrap_or("misc");
        let _ = writeln!(out, "{name},{width},{height},{division}");
    }
    out
}
