//! File-backed data source (CSV or JSON).
//!
//! CSV files need a header row with `date` and `cost` columns. JSON files
//! hold either an array of `{"date": ..., "cost": ...}` objects or an
//! object wrapping that array under `series`, `data` or `costs`.
//! Dates use the `YYYY-MM-DD` format.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use data_spi::{validate_series, CostPoint, DataError, DataSource, Result, SeriesQuery};
use serde::Deserialize;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "json" => Ok(FileFormat::Json),
            other => Err(DataError::Parse(format!(
                "unsupported file extension '{}' for {}",
                other,
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    date: String,
    #[serde(alias = "amount", alias = "value")]
    cost: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSeries {
    Points(Vec<RawPoint>),
    Wrapped {
        #[serde(alias = "data", alias = "costs")]
        series: Vec<RawPoint>,
    },
}

/// Reads a cost series from a CSV or JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    path: PathBuf,
    format: FileFormat,
}

impl FileSource {
    /// Create a source, detecting the format from the extension.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = FileFormat::from_path(&path)?;
        Ok(Self::with_format(path, format))
    }

    /// Create a source with an explicit format.
    pub fn with_format(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path, format }
    }

    /// Path the source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format used to parse the file.
    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn load(&self) -> Result<Vec<CostPoint>> {
        let file = File::open(&self.path)
            .map_err(|e| DataError::Io(format!("{}: {}", self.path.display(), e)))?;
        let reader = BufReader::new(file);
        match self.format {
            FileFormat::Csv => parse_csv(reader),
            FileFormat::Json => parse_json(reader),
        }
    }
}

impl DataSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, query: &SeriesQuery) -> Result<Vec<CostPoint>> {
        let points = self.load()?;
        tracing::debug!(
            source = %self.name,
            points = points.len(),
            "loaded cost series from file"
        );
        Ok(query.filter(&points))
    }
}

/// Parse a CSV cost series with `date,cost` headers.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<CostPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut raw = Vec::new();
    for (row, record) in csv_reader.deserialize::<RawPoint>().enumerate() {
        let record = record.map_err(|e| DataError::Parse(format!("row {}: {}", row + 1, e)))?;
        raw.push(record);
    }

    into_series(raw)
}

/// Parse a JSON cost series.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<CostPoint>> {
    let parsed: JsonSeries =
        serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;

    let raw = match parsed {
        JsonSeries::Points(points) => points,
        JsonSeries::Wrapped { series } => series,
    };

    into_series(raw)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DataError::InvalidDate(value.to_string()))
}

/// Convert raw rows into a sorted, validated series.
fn into_series(raw: Vec<RawPoint>) -> Result<Vec<CostPoint>> {
    let mut points = raw
        .into_iter()
        .map(|r| Ok(CostPoint::new(parse_date(&r.date)?, r.cost)))
        .collect::<Result<Vec<_>>>()?;

    points.sort_by_key(|p| p.date);
    validate_series(&points)?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_spi::SeriesError;
    use std::io::Write;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            FileFormat::from_path(Path::new("costs.CSV")).unwrap(),
            FileFormat::Csv
        );
        assert_eq!(
            FileFormat::from_path(Path::new("a/b/costs.json")).unwrap(),
            FileFormat::Json
        );
        assert!(FileFormat::from_path(Path::new("costs.xlsx")).is_err());
    }

    #[test]
    fn test_parse_csv() {
        let input = "date,cost\n2024-01-01,100.0\n2024-01-02, 110.5\n";
        let points = parse_csv(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].cost, 110.5);
        assert_eq!(points[1].date.to_string(), "2024-01-02");
    }

    #[test]
    fn test_parse_csv_sorts_rows() {
        let input = "date,cost\n2024-01-03,3\n2024-01-01,1\n2024-01-02,2\n";
        let points = parse_csv(input.as_bytes()).unwrap();
        let costs: Vec<f64> = points.iter().map(|p| p.cost).collect();
        assert_eq!(costs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_csv_bad_date() {
        let input = "date,cost\n01/02/2024,5\n";
        let err = parse_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::InvalidDate(ref d) if d == "01/02/2024"));
    }

    #[test]
    fn test_parse_csv_bad_cost() {
        let input = "date,cost\n2024-01-01,abc\n";
        let err = parse_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_parse_csv_duplicate_dates() {
        let input = "date,cost\n2024-01-01,1\n2024-01-01,2\n";
        let err = parse_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::Series(SeriesError::OutOfOrder { index: 1 })
        ));
    }

    #[test]
    fn test_parse_json_array() {
        let input = r#"[{"date":"2024-01-01","cost":10},{"date":"2024-01-02","amount":12}]"#;
        let points = parse_json(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].cost, 12.0);
    }

    #[test]
    fn test_parse_json_wrapped() {
        let input = r#"{"data":[{"date":"2024-03-01","value":7.5}]}"#;
        let points = parse_json(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].cost, 7.5);
    }

    #[test]
    fn test_parse_json_negative_cost() {
        let input = r#"[{"date":"2024-01-01","cost":-1}]"#;
        let err = parse_json(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Series(SeriesError::NegativeCost { .. })));
    }

    #[test]
    fn test_file_source_fetch() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "date,cost").unwrap();
        writeln!(file, "2024-01-01,100").unwrap();
        writeln!(file, "2024-01-02,105").unwrap();
        writeln!(file, "2024-01-03,110").unwrap();
        file.flush().unwrap();

        let source = FileSource::open(file.path()).unwrap();
        assert_eq!(source.format(), FileFormat::Csv);

        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let points = source.fetch(&SeriesQuery::all().between(start, end)).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].cost, 105.0);
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::with_format("/nonexistent/costs.json", FileFormat::Json);
        let err = source.fetch(&SeriesQuery::all()).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
        assert_eq!(source.name(), "costs.json");
    }
}
