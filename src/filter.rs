use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::model::{ParseError, Sector, StockRecord};

/// How the active predicates are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    Or,
    And,
}

impl FilterMode {
    pub const ALL: [FilterMode; 2] = [FilterMode::Or, FilterMode::And];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Or => "or",
            FilterMode::And => "and",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::Or => "Match any (OR)",
            FilterMode::And => "Match all (AND)",
        }
    }
}

impl FromStr for FilterMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "or" | "any" => Ok(FilterMode::Or),
            "and" | "all" => Ok(FilterMode::And),
            _ => Err(ParseError::new("filter mode", s)),
        }
    }
}

/// Comparison applied between the symbol query and each record's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolMatch {
    #[default]
    Contains,
    StartsWith,
    EndsWith,
    Equals,
}

impl SymbolMatch {
    pub const ALL: [SymbolMatch; 4] = [
        SymbolMatch::Contains,
        SymbolMatch::StartsWith,
        SymbolMatch::EndsWith,
        SymbolMatch::Equals,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolMatch::Contains => "contains",
            SymbolMatch::StartsWith => "starts-with",
            SymbolMatch::EndsWith => "ends-with",
            SymbolMatch::Equals => "equals",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SymbolMatch::Contains => "Contains",
            SymbolMatch::StartsWith => "Starts with",
            SymbolMatch::EndsWith => "Ends with",
            SymbolMatch::Equals => "Equals",
        }
    }

    /// Case-insensitive comparison of `symbol` against an already lowercased query.
    fn test(self, symbol: &str, query_lower: &str) -> bool {
        let symbol = symbol.to_lowercase();
        match self {
            SymbolMatch::Contains => symbol.contains(query_lower),
            SymbolMatch::StartsWith => symbol.starts_with(query_lower),
            SymbolMatch::EndsWith => symbol.ends_with(query_lower),
            SymbolMatch::Equals => symbol == query_lower,
        }
    }
}

impl fmt::Display for SymbolMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SymbolMatch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        SymbolMatch::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ParseError::new("symbol match", s))
    }
}

/// User-selected filter inputs for the stock grid.
///
/// Each non-empty input contributes one predicate; the predicates that are
/// active are folded together according to [`FilterMode`]. Sectors and
/// industries remember the order in which they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockFilter {
    sectors: IndexSet<Sector>,
    industries: IndexSet<String>,
    symbol_query: String,
    symbol_match: SymbolMatch,
    mode: FilterMode,
}

impl StockFilter {
    pub fn sectors(&self) -> impl Iterator<Item = Sector> + '_ {
        self.sectors.iter().copied()
    }

    pub fn industries(&self) -> impl Iterator<Item = &str> + '_ {
        self.industries.iter().map(String::as_str)
    }

    pub fn symbol_query(&self) -> &str {
        &self.symbol_query
    }

    pub fn symbol_match(&self) -> SymbolMatch {
        self.symbol_match
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn has_sector(&self, sector: Sector) -> bool {
        self.sectors.contains(&sector)
    }

    pub fn has_industry(&self, industry: &str) -> bool {
        self.industries.contains(industry)
    }

    pub fn set_sector(&mut self, sector: Sector, selected: bool) {
        if selected {
            self.sectors.insert(sector);
        } else {
            self.sectors.shift_remove(&sector);
        }
    }

    pub fn set_industry(&mut self, industry: &str, selected: bool) {
        if selected {
            self.industries.insert(industry.to_string());
        } else {
            self.industries.shift_remove(industry);
        }
    }

    pub fn set_symbol_query(&mut self, query: impl Into<String>) {
        self.symbol_query = query.into();
    }

    pub fn set_symbol_match(&mut self, symbol_match: SymbolMatch) {
        self.symbol_match = symbol_match;
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    /// Drop every selection and the symbol query. Mode and match kind are preferences and stay.
    pub fn clear(&mut self) {
        self.sectors.clear();
        self.industries.clear();
        self.symbol_query.clear();
    }

    /// Trimmed symbol query, or `None` when it contributes no predicate.
    pub fn active_symbol_query(&self) -> Option<&str> {
        let trimmed = self.symbol_query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn is_active(&self) -> bool {
        !self.sectors.is_empty() || !self.industries.is_empty() || self.active_symbol_query().is_some()
    }

    pub fn matches(&self, record: &StockRecord) -> bool {
        let query_lower = self.active_symbol_query().map(str::to_lowercase);
        self.matches_with(record, query_lower.as_deref())
    }

    /// Keep the records accepted by this filter, preserving their order.
    pub fn apply(&self, records: &[StockRecord]) -> Vec<StockRecord> {
        if !self.is_active() {
            return records.to_vec();
        }

        let query_lower = self.active_symbol_query().map(str::to_lowercase);
        records
            .iter()
            .filter(|record| self.matches_with(record, query_lower.as_deref()))
            .cloned()
            .collect()
    }

    /// Like [`StockFilter::apply`] but borrows, pairing each record with its index in `records`.
    pub fn apply_indexed<'a>(&self, records: &'a [StockRecord]) -> Vec<(usize, &'a StockRecord)> {
        let query_lower = self.active_symbol_query().map(str::to_lowercase);
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches_with(record, query_lower.as_deref()))
            .collect()
    }

    fn matches_with(&self, record: &StockRecord, query_lower: Option<&str>) -> bool {
        let mut predicates: Vec<bool> = Vec::with_capacity(3);
        if !self.sectors.is_empty() {
            predicates.push(self.sectors.contains(&record.sector));
        }
        if !self.industries.is_empty() {
            predicates.push(self.industries.contains(record.industry.as_str()));
        }
        if let Some(query) = query_lower {
            predicates.push(self.symbol_match.test(&record.symbol, query));
        }

        if predicates.is_empty() {
            return true;
        }

        match self.mode {
            FilterMode::Or => predicates.into_iter().any(|hit| hit),
            FilterMode::And => predicates.into_iter().all(|hit| hit),
        }
    }
}
