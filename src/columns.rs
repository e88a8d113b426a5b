use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::{ParseError, StockRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Symbol,
    CompanyName,
    Price,
    Change,
    ChangePercent,
    High52Week,
    Low52Week,
    Sector,
    Industry,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Symbol,
        Field::CompanyName,
        Field::Price,
        Field::Change,
        Field::ChangePercent,
        Field::High52Week,
        Field::Low52Week,
        Field::Sector,
        Field::Industry,
    ];

    /// Key used for the field in serialized records and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Field::Symbol => "symbol",
            Field::CompanyName => "companyName",
            Field::Price => "price",
            Field::Change => "change",
            Field::ChangePercent => "changePercent",
            Field::High52Week => "high52Week",
            Field::Low52Week => "low52Week",
            Field::Sector => "sector",
            Field::Industry => "industry",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Field::Symbol => "Symbol",
            Field::CompanyName => "Company",
            Field::Price => "Price",
            Field::Change => "Change",
            Field::ChangePercent => "Change %",
            Field::High52Week => "52W High",
            Field::Low52Week => "52W Low",
            Field::Sector => "Sector",
            Field::Industry => "Industry",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Price
                | Field::Change
                | Field::ChangePercent
                | Field::High52Week
                | Field::Low52Week
        )
    }

    /// Text filtering is offered on the descriptive columns only.
    pub fn is_filterable(self) -> bool {
        matches!(
            self,
            Field::Symbol | Field::CompanyName | Field::Sector | Field::Industry
        )
    }

    fn number(self, record: &StockRecord) -> Option<f64> {
        match self {
            Field::Price => Some(record.price),
            Field::Change => Some(record.change),
            Field::ChangePercent => Some(record.change_percent),
            Field::High52Week => Some(record.high_52_week),
            Field::Low52Week => Some(record.low_52_week),
            _ => None,
        }
    }

    fn text(self, record: &StockRecord) -> &str {
        match self {
            Field::Symbol => &record.symbol,
            Field::CompanyName => &record.company_name,
            Field::Sector => record.sector.label(),
            Field::Industry => &record.industry,
            _ => "",
        }
    }

    /// Display string for the cell of `record` in this column.
    pub fn format(self, record: &StockRecord) -> String {
        match self {
            Field::Price | Field::High52Week | Field::Low52Week => {
                format_currency(self.number(record).unwrap_or_default())
            }
            Field::Change => format_signed(record.change),
            Field::ChangePercent => format_signed_percent(record.change_percent),
            _ => self.text(record).to_string(),
        }
    }

    pub fn tone(self, record: &StockRecord) -> CellTone {
        match self {
            Field::Change | Field::ChangePercent => {
                CellTone::of(self.number(record).unwrap_or_default())
            }
            _ => CellTone::Neutral,
        }
    }

    pub fn compare(self, a: &StockRecord, b: &StockRecord) -> Ordering {
        match (self.number(a), self.number(b)) {
            (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
            _ => self.text(a).cmp(self.text(b)),
        }
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| {
                field.key().eq_ignore_ascii_case(&wanted)
                    || field
                        .header()
                        .chars()
                        .filter(|c| c.is_alphanumeric())
                        .collect::<String>()
                        .eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| ParseError::new("column", s))
    }
}

/// Colour hint for a cell: gains and flat moves are positive, losses negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    Positive,
    Negative,
    Neutral,
}

impl CellTone {
    fn of(value: f64) -> Self {
        if value >= 0.0 {
            CellTone::Positive
        } else {
            CellTone::Negative
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CellTone::Positive => "cell--positive",
            CellTone::Negative => "cell--negative",
            CellTone::Neutral => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pinned {
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Row selection checkbox.
    Selection,
    Data(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub kind: ColumnKind,
    pub header: &'static str,
    pub sortable: bool,
    pub filterable: bool,
    pub width: Option<u32>,
    pub pinned: Option<Pinned>,
}

/// Grid layout: a pinned selection column followed by one column per field.
pub fn column_defs() -> Vec<ColumnDef> {
    let mut columns = Vec::with_capacity(Field::ALL.len() + 1);
    columns.push(ColumnDef {
        kind: ColumnKind::Selection,
        header: " ",
        sortable: false,
        filterable: false,
        width: Some(50),
        pinned: Some(Pinned::Left),
    });
    columns.extend(Field::ALL.into_iter().map(|field| ColumnDef {
        kind: ColumnKind::Data(field),
        header: field.header(),
        sortable: true,
        filterable: field.is_filterable(),
        width: None,
        pinned: None,
    }));
    columns
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortState {
    /// Next state after the header of `field` is clicked: ascending, descending, then unsorted.
    pub fn cycle(current: Option<SortState>, field: Field) -> Option<SortState> {
        match current {
            Some(state) if state.field == field => match state.direction {
                SortDirection::Ascending => Some(SortState {
                    field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                field,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

impl SortState {
    pub fn compare(&self, a: &StockRecord, b: &StockRecord) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Stable in-place sort of `records` by a column.
pub fn sort_records(records: &mut [StockRecord], sort: SortState) {
    records.sort_by(|a, b| sort.compare(a, b));
}

pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

pub fn format_signed_percent(value: f64) -> String {
    format!("{}%", format_signed(value))
}

/// Tab-separated rendering with a header row, as pasted into spreadsheets.
pub fn to_tsv<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a StockRecord>,
{
    let mut lines = vec![Field::ALL
        .iter()
        .map(|field| field.header())
        .collect::<Vec<_>>()
        .join("\t")];
    for record in records {
        lines.push(
            Field::ALL
                .iter()
                .map(|field| field.format(record))
                .collect::<Vec<_>>()
                .join("\t"),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sector;

    fn record(symbol: &str, price: f64, change: f64) -> StockRecord {
        StockRecord {
            symbol: symbol.to_string(),
            company_name: format!("{symbol} LLC"),
            price,
            change,
            change_percent: change / price * 100.0,
            high_52_week: price * 1.2,
            low_52_week: price * 0.8,
            sector: Sector::Healthcare,
            industry: "Biotechnology".to_string(),
        }
    }

    #[test]
    fn formatters_match_grid_display() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_signed(1.234), "+1.23");
        assert_eq!(format_signed(0.0), "+0.00");
        assert_eq!(format_signed(-3.1), "-3.10");
        assert_eq!(format_signed_percent(-0.456), "-0.46%");
    }

    #[test]
    fn change_columns_are_toned() {
        let gain = record("UP", 10.0, 1.0);
        let loss = record("DN", 10.0, -1.0);
        assert_eq!(Field::Change.tone(&gain), CellTone::Positive);
        assert_eq!(Field::ChangePercent.tone(&loss), CellTone::Negative);
        assert_eq!(Field::Price.tone(&loss), CellTone::Neutral);
    }

    #[test]
    fn column_defs_pin_selection_first() {
        let columns = column_defs();
        assert_eq!(columns.len(), 10);
        assert_eq!(columns[0].kind, ColumnKind::Selection);
        assert_eq!(columns[0].pinned, Some(Pinned::Left));
        assert!(columns[1..].iter().all(|column| column.sortable));
        let filterable: Vec<_> = columns
            .iter()
            .filter(|column| column.filterable)
            .map(|column| column.header)
            .collect();
        assert_eq!(filterable, vec!["Symbol", "Company", "Sector", "Industry"]);
    }

    #[test]
    fn sort_orders_numbers_and_text() {
        let mut records = vec![
            record("BBB", 30.0, 1.0),
            record("AAA", 10.0, -2.0),
            record("CCC", 20.0, 0.5),
        ];

        sort_records(
            &mut records,
            SortState {
                field: Field::Price,
                direction: SortDirection::Descending,
            },
        );
        let order: Vec<_> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["BBB", "CCC", "AAA"]);

        sort_records(
            &mut records,
            SortState {
                field: Field::Symbol,
                direction: SortDirection::Ascending,
            },
        );
        let order: Vec<_> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn header_clicks_cycle_sort() {
        let first = SortState::cycle(None, Field::Change);
        assert_eq!(
            first,
            Some(SortState {
                field: Field::Change,
                direction: SortDirection::Ascending
            })
        );
        let second = SortState::cycle(first, Field::Change);
        assert_eq!(second.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(SortState::cycle(second, Field::Change), None);
        assert_eq!(
            SortState::cycle(second, Field::Symbol).map(|s| s.field),
            Some(Field::Symbol)
        );
    }

    #[test]
    fn field_parses_keys_and_headers() {
        assert_eq!("price".parse::<Field>(), Ok(Field::Price));
        assert_eq!("changePercent".parse::<Field>(), Ok(Field::ChangePercent));
        assert_eq!("52W High".parse::<Field>(), Ok(Field::High52Week));
        assert_eq!("company".parse::<Field>(), Ok(Field::CompanyName));
        assert!("volume".parse::<Field>().is_err());
    }

    #[test]
    fn tsv_has_header_and_formatted_rows() {
        let rows = [record("AAA", 10.0, -2.0)];
        let tsv = to_tsv(rows.iter());
        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Symbol\tCompany\tPrice"));
        assert!(lines[1].starts_with("AAA\tAAA LLC\t$10.00\t-2.00\t-20.00%"));
    }
}
