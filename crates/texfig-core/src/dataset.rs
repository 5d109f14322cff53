// File: crates/texfig-core/src/dataset.rs
// Summary: Date-indexed dataset with named numeric columns and the built-in sample series.

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::{FigureError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }
}

/// Columns sharing one date index.
/// Invariant: every column has exactly `index.len()` values.
#[derive(Clone, Debug)]
pub struct Dataset {
    index: Vec<DateTime<Tz>>,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(index: Vec<DateTime<Tz>>, columns: Vec<Column>) -> Result<Self> {
        for c in &columns {
            if c.values.len() != index.len() {
                return Err(FigureError::LengthMismatch {
                    column: c.name.clone(),
                    expected: index.len(),
                    got: c.values.len(),
                });
            }
        }
        Ok(Self { index, columns })
    }

    /// Eleven days from 2000-01-01 with `col1` counting up 0..=10 and `col2` down 10..=0.
    pub fn sample(tz: Tz) -> Result<Self> {
        let n = 11usize;
        let start = NaiveDate::from_ymd_opt(2000, 1, 1)
            .ok_or_else(|| FigureError::InvalidLocalTime("2000-01-01".to_string()))?;
        let index = daily_index(start, n, tz)?;
        let col1 = (0..n).map(|i| i as f64).collect();
        let col2 = (0..n).map(|i| (n - 1 - i) as f64).collect();
        Self::new(index, vec![Column::new("col1", col1), Column::new("col2", col2)])
    }

    pub fn index(&self) -> &[DateTime<Tz>] { &self.index }
    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn len(&self) -> usize { self.index.len() }
    pub fn is_empty(&self) -> bool { self.index.is_empty() }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FigureError::UnknownColumn(name.to_string()))
    }
}

/// Local midnights of `n` consecutive calendar days starting at `start`.
/// Built from calendar dates so DST shifts never skip or repeat a day.
pub fn daily_index(start: NaiveDate, n: usize, tz: Tz) -> Result<Vec<DateTime<Tz>>> {
    (0..n as u64)
        .map(|i| {
            let day = start
                .checked_add_days(Days::new(i))
                .ok_or_else(|| FigureError::InvalidLocalTime(format!("{start} + {i} days")))?;
            local_midnight(day, tz)
        })
        .collect()
}

pub fn local_midnight(day: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    let naive = day.and_hms_opt(0, 0, 0)
        .ok_or_else(|| FigureError::InvalidLocalTime(day.to_string()))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| FigureError::InvalidLocalTime(naive.to_string()))
}

/// Parse an IANA zone name such as `EST` or `Europe/Berlin`.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| FigureError::UnknownTimeZone(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn sample_shape() {
        let ds = Dataset::sample(chrono_tz::Tz::EST).unwrap();
        assert_eq!(ds.len(), 11);
        assert_eq!(ds.column("col1").unwrap().values[0], 0.0);
        assert_eq!(ds.column("col1").unwrap().values[10], 10.0);
        assert_eq!(ds.column("col2").unwrap().values[0], 10.0);
        assert_eq!(ds.column("col2").unwrap().values[10], 0.0);
        let first = ds.index()[0];
        assert_eq!((first.year(), first.month(), first.day(), first.hour()), (2000, 1, 1, 0));
        assert_eq!(ds.index()[10].day(), 11);
    }

    #[test]
    fn mismatched_column_is_rejected() {
        let index = daily_index(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 3, chrono_tz::Tz::UTC).unwrap();
        let err = Dataset::new(index, vec![Column::new("short", vec![1.0, 2.0])]).unwrap_err();
        assert!(matches!(err, FigureError::LengthMismatch { expected: 3, got: 2, .. }));
    }

    #[test]
    fn daily_index_spans_dst_change() {
        // 2021-03-14 is the spring-forward day in New York.
        let tz = parse_time_zone("America/New_York").unwrap();
        let idx = daily_index(NaiveDate::from_ymd_opt(2021, 3, 13).unwrap(), 3, tz).unwrap();
        assert!(idx.iter().all(|d| d.hour() == 0));
        assert_eq!(idx[2].day(), 15);
    }

    #[test]
    fn unknown_zone() {
        assert!(matches!(parse_time_zone("Mars/Olympus"), Err(FigureError::UnknownTimeZone(_))));
        assert_eq!(parse_time_zone("EST").unwrap(), chrono_tz::Tz::EST);
    }

    #[test]
    fn unknown_column() {
        let ds = Dataset::sample(chrono_tz::Tz::EST).unwrap();
        assert!(matches!(ds.column("col3"), Err(FigureError::UnknownColumn(_))));
    }
}
