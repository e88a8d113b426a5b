use std::fmt;

use crate::filter::StockFilter;

/// Human readable description of the filters currently narrowing the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub headline: String,
    pub parts: Vec<String>,
}

impl FilterSummary {
    /// `None` when no filter is active. A symbol query on its own also counts,
    /// not only sector or industry picks.
    pub fn describe(filter: &StockFilter, filtered: usize, total: usize) -> Option<Self> {
        if !filter.is_active() {
            return None;
        }

        let mut parts = Vec::with_capacity(3);

        let sectors: Vec<&str> = filter.sectors().map(|sector| sector.label()).collect();
        if !sectors.is_empty() {
            parts.push(format!("Sectors: {}", sectors.join(", ")));
        }

        let industries: Vec<&str> = filter.industries().collect();
        if !industries.is_empty() {
            parts.push(format!("Industries: {}", industries.join(", ")));
        }

        if let Some(query) = filter.active_symbol_query() {
            parts.push(format!(
                "Symbol Filter: {} \"{}\"",
                filter.symbol_match().label(),
                query
            ));
        }

        Some(Self {
            headline: format!("Showing {filtered} of {total} stocks"),
            parts,
        })
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline)?;
        for part in &self.parts {
            write!(f, " • {part}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SymbolMatch;
    use crate::model::Sector;

    #[test]
    fn no_summary_without_active_filters() {
        assert_eq!(FilterSummary::describe(&StockFilter::default(), 10, 10), None);
    }

    #[test]
    fn symbol_only_filter_is_summarised() {
        let mut filter = StockFilter::default();
        filter.set_symbol_query("ab");

        let summary = FilterSummary::describe(&filter, 2, 10).expect("summary");
        assert_eq!(
            summary.to_string(),
            "Showing 2 of 10 stocks • Symbol Filter: Contains \"ab\""
        );
    }

    #[test]
    fn lists_every_active_filter_in_pick_order() {
        let mut filter = StockFilter::default();
        filter.set_sector(Sector::RealEstate, true);
        filter.set_sector(Sector::Technology, true);
        filter.set_industry("Banks", true);
        filter.set_symbol_query(" X ");
        filter.set_symbol_match(SymbolMatch::EndsWith);

        let summary = FilterSummary::describe(&filter, 4, 25).expect("summary");
        assert_eq!(summary.headline, "Showing 4 of 25 stocks");
        assert_eq!(
            summary.parts,
            vec![
                "Sectors: Real Estate, Technology".to_string(),
                "Industries: Banks".to_string(),
                "Symbol Filter: Ends with \"X\"".to_string(),
            ]
        );
    }
}
