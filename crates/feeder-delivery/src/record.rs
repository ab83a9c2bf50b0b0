//! Flat JSON records, one per trading date.

use serde_json::{Map, Value as Json};

use feeder_core::types::{FeatureTable, Value};

/// Render the table as one JSON object per row:
/// `{"ticker": ..., "date": "YYYY-MM-DD", <column>: number | null, ...}`.
///
/// Undefined cells become `null`, so downstream consumers only ever see
/// numbers, nulls and strings.
pub fn to_records(ticker: &str, table: &FeatureTable) -> Vec<Map<String, Json>> {
    let mut records = Vec::with_capacity(table.num_rows());
    for (i, date) in table.dates().iter().enumerate() {
        let mut record = Map::new();
        record.insert("ticker".to_string(), Json::from(ticker));
        record.insert("date".to_string(), Json::from(date.to_string()));
        for (name, cell) in table.row(i).into_iter().flatten() {
            let json = match cell {
                Value::Number(v) => Json::from(v),
                Value::Undefined => Json::Null,
                Value::Text(s) => Json::from(s),
            };
            record.insert(name.to_string(), json);
        }
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use feeder_core::types::{Bar, FeatureTable, PriceTable, Series};

    fn features() -> FeatureTable {
        let bars = (1..=2)
            .map(|d| {
                Bar::new(
                    NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                    100.0,
                    101.0,
                    99.0,
                    100.0 + d as f64,
                    1000.0,
                )
            })
            .collect();
        let table = PriceTable::new(bars).unwrap();
        let mut features = FeatureTable::from_table(&table);
        features
            .join(Series::new("MOM_1", vec![f64::NAN, 1.0]))
            .unwrap();
        features
    }

    #[test]
    fn test_record_shape() {
        let records = to_records("MSFT", &features());
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first["ticker"], Json::from("MSFT"));
        assert_eq!(first["date"], Json::from("2024-01-01"));
        assert_eq!(first["Close"], Json::from(101.0));
        assert_eq!(first["MOM_1"], Json::Null);

        let second = &records[1];
        assert_eq!(second["MOM_1"], Json::from(1.0));
    }

    #[test]
    fn test_records_are_serializable() {
        for record in to_records("MSFT", &features()) {
            let text = serde_json::to_string(&record).unwrap();
            assert!(!text.contains("NaN"));
        }
    }
}
