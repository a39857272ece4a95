//! Whole numbers of any size a `Decimal` can carry.
//!
//! ## Group Decomposition
//! ```text
//! 12_345_678
//!   │
//!   ├── split into groups of 1000, least significant first
//!   │     [678, 345, 12]   scale index 0, 1, 2
//!   │
//!   ├── render each nonzero group, add the scale word
//!   │     "seiscentos e setenta e oito"
//!   │     "trezentos e quarenta e cinco mil"
//!   │     "doze milhões"
//!   │
//!   └── join high to low; the connector after a group depends on the
//!       group directly below it (345 → ", ", 678 → ", ")
//!         "doze milhões, trezentos e quarenta e cinco mil, seiscentos e ..."
//! ```

use super::lexicon::{SCALES, ZERO};
use super::triplet::render_triplet;

const GROUP: u128 = 1000;

/// Largest integer the scale table can name: 10^30 - 1.
pub(crate) const MAX_NUMBER: u128 = GROUP.pow(SCALES.len() as u32) - 1;

/// Writes out a non-negative integer in Brazilian Portuguese.
///
/// Thousands keep their leading "um": `1000` is "um mil". Callers keep `n` at
/// or below [`MAX_NUMBER`]; every whole-real count a `Money` can hold is.
pub(crate) fn number_to_words(n: u128) -> String {
    debug_assert!(n <= MAX_NUMBER, "{n} is past the last scale word");
    if n == 0 {
        return ZERO.to_string();
    }

    let groups = split_groups(n);

    // Low to high, zero groups skipped
    let fragments: Vec<(usize, String)> = groups
        .iter()
        .enumerate()
        .filter(|(_, group)| **group > 0)
        .map(|(scale, group)| (scale, render_group(*group, scale)))
        .collect();

    let mut words = String::new();
    for (position, (scale, text)) in fragments.iter().enumerate().rev() {
        words.push_str(text);
        // Anything left below means scale > 0
        if position > 0 {
            words.push_str(connector(groups[scale - 1]));
        }
    }

    words.trim().to_string()
}

/// Three-digit groups, least significant first.
fn split_groups(mut n: u128) -> Vec<u16> {
    let mut groups = Vec::with_capacity(SCALES.len());
    while n > 0 {
        groups.push((n % GROUP) as u16);
        n /= GROUP;
    }
    groups
}

fn render_group(group: u16, scale: usize) -> String {
    let digits = render_triplet(group);
    if scale == 0 {
        return digits;
    }
    format!("{} {}", digits, SCALES[scale].word_for(group))
}

/// Joins a group to the rest of the number, decided by the group directly
/// below it (which may itself be zero).
fn connector(below: u16) -> &'static str {
    match below {
        0..=100 => " e ",
        _ => ", ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(number_to_words(0), "zero");
    }

    #[test]
    fn test_single_group() {
        assert_eq!(number_to_words(1), "um");
        assert_eq!(number_to_words(100), "cem");
        assert_eq!(number_to_words(875), "oitocentos e setenta e cinco");
    }

    #[test]
    fn test_thousands_keep_um() {
        assert_eq!(number_to_words(1000), "um mil");
        assert_eq!(number_to_words(2000), "dois mil");
        assert_eq!(number_to_words(150_000), "cento e cinquenta mil");
    }

    #[test]
    fn test_comma_after_group_above_hundred() {
        assert_eq!(number_to_words(1988), "um mil, novecentos e oitenta e oito");
        assert_eq!(number_to_words(2101), "dois mil, cento e um");
        assert_eq!(
            number_to_words(12_345_678),
            "doze milhões, trezentos e quarenta e cinco mil, seiscentos e setenta e oito"
        );
    }

    #[test]
    fn test_e_after_small_or_round_hundred_group() {
        assert_eq!(number_to_words(1001), "um mil e um");
        assert_eq!(number_to_words(1099), "um mil e noventa e nove");
        assert_eq!(number_to_words(1100), "um mil e cem");
        assert_eq!(number_to_words(1200), "um mil, duzentos");
    }

    #[test]
    fn test_connector_looks_only_at_the_group_directly_below() {
        // Group below "um milhão" is zero, so "e" even though 500 follows
        assert_eq!(number_to_words(1_000_500), "um milhão e quinhentos");
        // Group below "um milhão" is 1, the thousand group
        assert_eq!(number_to_words(1_001_000), "um milhão e um mil");
        assert_eq!(
            number_to_words(1_250_300),
            "um milhão, duzentos e cinquenta mil, trezentos"
        );
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(number_to_words(1_000_000), "um milhão");
        assert_eq!(number_to_words(2_000_000), "dois milhões");
        assert_eq!(number_to_words(1_000_000_000), "um bilhão");
        assert_eq!(number_to_words(3_000_000_000_000), "três trilhões");
        assert_eq!(number_to_words(1_000_000_000_000_000), "um quatrilhão");
    }

    #[test]
    fn test_largest_decimal() {
        let words = number_to_words(79_228_162_514_264_337_593_543_950_335);
        assert!(words.starts_with("setenta e nove octilhões, duzentos e vinte e oito septilhões"));
        assert!(words.ends_with("novecentos e cinquenta mil, trezentos e trinta e cinco"));
    }

    #[test]
    fn test_largest_nameable_number() {
        assert_eq!(MAX_NUMBER, 10u128.pow(30) - 1);
        let words = number_to_words(MAX_NUMBER);
        assert!(words.starts_with("novecentos e noventa e nove octilhões, "));
        assert!(words.ends_with("mil, novecentos e noventa e nove"));
    }

    #[test]
    fn test_split_groups() {
        assert_eq!(split_groups(12_345_678), vec![678, 345, 12]);
        assert_eq!(split_groups(1_000_000), vec![0, 0, 1]);
    }

    #[test]
    fn test_connector() {
        assert_eq!(connector(0), " e ");
        assert_eq!(connector(99), " e ");
        assert_eq!(connector(100), " e ");
        assert_eq!(connector(101), ", ");
        assert_eq!(connector(999), ", ");
    }
}
