use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Consumer Cyclical")]
    ConsumerCyclical,
    Industrials,
    Energy,
    Telecommunications,
    #[serde(rename = "Consumer Defensive")]
    ConsumerDefensive,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Utilities,
}

impl Sector {
    pub const ALL: [Sector; 10] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::FinancialServices,
        Sector::ConsumerCyclical,
        Sector::Industrials,
        Sector::Energy,
        Sector::Telecommunications,
        Sector::ConsumerDefensive,
        Sector::RealEstate,
        Sector::Utilities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::FinancialServices => "Financial Services",
            Sector::ConsumerCyclical => "Consumer Cyclical",
            Sector::Industrials => "Industrials",
            Sector::Energy => "Energy",
            Sector::Telecommunications => "Telecommunications",
            Sector::ConsumerDefensive => "Consumer Defensive",
            Sector::RealEstate => "Real Estate",
            Sector::Utilities => "Utilities",
        }
    }

    /// Industries an issuer in this sector can be classified under.
    pub fn industries(self) -> &'static [&'static str] {
        match self {
            Sector::Technology => &["Software", "Semiconductors", "Hardware", "IT Services"],
            Sector::Healthcare => &[
                "Biotechnology",
                "Pharmaceuticals",
                "Medical Devices",
                "Healthcare Services",
            ],
            Sector::FinancialServices => {
                &["Banks", "Insurance", "Asset Management", "Credit Services"]
            }
            Sector::ConsumerCyclical => &[
                "Auto Manufacturers",
                "Retail",
                "Travel & Leisure",
                "Restaurants",
            ],
            Sector::Industrials => &["Aerospace", "Machinery", "Construction", "Transportation"],
            Sector::Energy => &["Oil & Gas", "Renewable Energy", "Coal", "Utilities"],
            Sector::Telecommunications => &[
                "Telecom Services",
                "Wireless",
                "Internet Services",
                "Cable",
            ],
            Sector::ConsumerDefensive => &[
                "Food & Beverage",
                "Household Products",
                "Tobacco",
                "Discount Stores",
            ],
            Sector::RealEstate => &[
                "REITs",
                "Real Estate Services",
                "Development",
                "Diversified",
            ],
            Sector::Utilities => &["Electric", "Water", "Gas", "Renewable Utilities"],
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a textual option does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Sector {
    type Err = ParseError;

    /// Accepts the display label or its kebab-case form, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', " ");
        Sector::ALL
            .into_iter()
            .find(|sector| sector.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseError::new("sector", s))
    }
}

/// Every industry across all sectors, without duplicates, in sector order.
pub fn all_industries() -> Vec<&'static str> {
    let mut industries: Vec<&'static str> = Vec::with_capacity(Sector::ALL.len() * 4);
    for sector in Sector::ALL {
        for industry in sector.industries() {
            if !industries.contains(industry) {
                industries.push(industry);
            }
        }
    }
    industries
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub symbol: String,
    pub company_name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high_52_week: f64,
    pub low_52_week: f64,
    pub sector: Sector,
    pub industry: String,
}

impl StockRecord {
    pub fn range_is_consistent(&self) -> bool {
        self.low_52_week <= self.price && self.price <= self.high_52_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sector_has_four_industries() {
        for sector in Sector::ALL {
            assert_eq!(sector.industries().len(), 4, "{sector}");
        }
    }

    #[test]
    fn industries_are_deduplicated() {
        let industries = all_industries();
        assert_eq!(industries.len(), 39, "Utilities is shared by two sectors");
        assert_eq!(industries.first(), Some(&"Software"));
        assert_eq!(
            industries.iter().filter(|name| **name == "Utilities").count(),
            1
        );
    }

    #[test]
    fn sector_parses_label_and_kebab_case() {
        assert_eq!("Real Estate".parse::<Sector>(), Ok(Sector::RealEstate));
        assert_eq!(
            "financial-services".parse::<Sector>(),
            Ok(Sector::FinancialServices)
        );
        assert!("Crypto".parse::<Sector>().is_err());
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = StockRecord {
            symbol: "ACME".into(),
            company_name: "Acme Inc".into(),
            price: 12.5,
            change: -0.5,
            change_percent: -4.0,
            high_52_week: 15.0,
            low_52_week: 10.0,
            sector: Sector::ConsumerDefensive,
            industry: "Tobacco".into(),
        };

        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["companyName"], "Acme Inc");
        assert_eq!(json["changePercent"], -4.0);
        assert_eq!(json["high52Week"], 15.0);
        assert_eq!(json["low52Week"], 10.0);
        assert_eq!(json["sector"], "Consumer Defensive");
        assert!(record.range_is_consistent());
    }
}
