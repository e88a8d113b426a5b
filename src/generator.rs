use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{Sector, StockRecord};

const LAST_NAMES: [&str; 40] = [
    "Abbott", "Barton", "Bechtelar", "Bergstrom", "Carroll", "Cole", "Cronin", "Daniel",
    "Dibbert", "Effertz", "Feeney", "Gleason", "Goodwin", "Hahn", "Hane", "Heller", "Jacobs",
    "Kemmer", "Kihn", "Kuhic", "Larson", "Lind", "Mante", "Marks", "Mohr", "Nolan", "Okuneva",
    "Pacocha", "Quigley", "Reilly", "Rohan", "Sauer", "Schiller", "Stark", "Towne", "Upton",
    "Veum", "Walsh", "Wiza", "Zulauf",
];

const COMPANY_SUFFIXES: [&str; 4] = ["Inc", "and Sons", "LLC", "Group"];

const CORPORATE_WORDS: [&str; 8] = [
    "inc",
    "llc",
    "ltd",
    "corp",
    "corporation",
    "group",
    "company",
    "co",
];

/// Produces synthetic stock records from a seeded random source.
pub struct StockGenerator {
    rng: StdRng,
}

impl StockGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<StockRecord> {
        (0..count).map(|_| self.record()).collect()
    }

    fn record(&mut self) -> StockRecord {
        let company_name = self.company_name();
        let symbol = self.symbol_for(&company_name);

        let price = round2(self.rng.gen_range(5.0..=500.0));
        let change = round2(self.rng.gen_range(-15.0..=15.0));
        let change_percent = round2(change / price * 100.0);

        // Rounding may nudge a bound across the price; clamp so the range holds.
        let high_52_week = round2(self.rng.gen_range(price..=price * 1.5)).max(price);
        let low_52_week = round2(self.rng.gen_range(price * 0.5..=price)).min(price);

        let sector = *Sector::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Sector::Technology);
        let industry = sector
            .industries()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string();

        StockRecord {
            symbol,
            company_name,
            price,
            change,
            change_percent,
            high_52_week,
            low_52_week,
            sector,
            industry,
        }
    }

    fn company_name(&mut self) -> String {
        let mut last_name = || LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        let (first, second, third) = (last_name(), last_name(), last_name());

        match self.rng.gen_range(0..3) {
            0 => {
                let suffix = COMPANY_SUFFIXES[self.rng.gen_range(0..COMPANY_SUFFIXES.len())];
                format!("{first} {suffix}")
            }
            1 => format!("{first} - {second}"),
            _ => format!("{first}, {second} and {third}"),
        }
    }

    fn symbol_for(&mut self, company_name: &str) -> String {
        let prefix_len = if self.rng.gen_bool(0.5) { 3 } else { 4 };
        derive_symbol(company_name, prefix_len)
    }
}

/// Builds a ticker from a company name.
///
/// Corporate designators are dropped first. A single remaining word yields its
/// first `prefix_len` characters; several words yield the initials of the
/// first four. Words with no letters never give an initial, so
/// `Kling - Wolff` becomes `KW`, not `K-W`.
pub fn derive_symbol(company_name: &str, prefix_len: usize) -> String {
    let words: Vec<&str> = company_name
        .split_whitespace()
        .filter(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
            !CORPORATE_WORDS
                .iter()
                .any(|corporate| bare.eq_ignore_ascii_case(corporate))
        })
        .filter(|word| word.chars().any(char::is_alphabetic))
        .collect();

    let symbol: String = match words.as_slice() {
        [] => company_name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(prefix_len)
            .collect(),
        [single] => single
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(prefix_len)
            .collect(),
        many => many
            .iter()
            .take(4)
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .collect(),
    };

    symbol.to_uppercase()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_symbol_strips_corporate_words() {
        assert_eq!(derive_symbol("Hahn Inc", 3), "HAH");
        assert_eq!(derive_symbol("Hahn Inc", 4), "HAHN");
        assert_eq!(derive_symbol("Stark Group", 4), "STAR");
        assert_eq!(derive_symbol("Acme Corp LLC", 3), "ACM");
    }

    #[test]
    fn derive_symbol_uses_initials_for_multiple_words() {
        assert_eq!(derive_symbol("Kihn - Walsh", 3), "KW");
        assert_eq!(derive_symbol("Cole, Upton and Veum", 3), "CUAV");
        assert_eq!(derive_symbol("Lind and Sons", 4), "LAS");
        assert_eq!(derive_symbol("a b c d e f", 3), "ABCD");
    }

    #[test]
    fn derive_symbol_skips_punctuation_words() {
        assert_eq!(derive_symbol("Kling - Wolff", 3), "KW");
        assert_eq!(derive_symbol("Kling & Wolff & Hahn", 3), "KWH");
    }

    #[test]
    fn derive_symbol_falls_back_when_only_designators_remain() {
        assert_eq!(derive_symbol("Company Inc", 3), "COM");
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let first = StockGenerator::new(42).generate(16);
        let second = StockGenerator::new(42).generate(16);
        let other = StockGenerator::new(43).generate(16);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn generated_records_respect_ranges() {
        let records = StockGenerator::new(7).generate(500);
        assert_eq!(records.len(), 500);

        for record in &records {
            assert!((5.0..=500.0).contains(&record.price), "{record:?}");
            assert!((-15.0..=15.0).contains(&record.change), "{record:?}");
            assert!(record.range_is_consistent(), "{record:?}");
            assert!(record.high_52_week <= record.price * 1.5 + 0.01);
            assert!(record.low_52_week >= record.price * 0.5 - 0.01);
            assert!(
                record.sector.industries().contains(&record.industry.as_str()),
                "{record:?}"
            );
            assert!(!record.symbol.is_empty());
            assert_eq!(record.symbol, record.symbol.to_uppercase());
        }
    }

    #[test]
    fn change_percent_is_relative_to_price() {
        for record in StockGenerator::new(11).generate(50) {
            let expected = round2(record.change / record.price * 100.0);
            assert!((record.change_percent - expected).abs() < 1e-9);
        }
    }
}
