//! Dataset sources and the CSV trip reader.
//!
//! Every city file has a leading unlabeled index column, which is dropped.
//! The remaining columns are looked up by header name, so column order and
//! extra columns such as `Trip Duration` do not matter.

use crate::record::TripRecord;
use crate::table::TripTable;
use bikeshare_common::{BikeshareError, City, Result};
use bikeshare_config::Config;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Anything that can produce the full trip table of a city.
pub trait TripSource {
    /// Loads every row of the city's dataset, or fails without a partial table.
    fn load(&self, city: City) -> Result<TripTable>;
}

/// Reads city datasets from CSV files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTripSource {
    datasets: BTreeMap<City, PathBuf>,
}

impl CsvTripSource {
    /// Source over an explicit city to file mapping.
    pub const fn new(datasets: BTreeMap<City, PathBuf>) -> Self {
        Self { datasets }
    }

    /// Source over the dataset paths of a configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            City::ALL
                .into_iter()
                .filter_map(|city| config.dataset_path(city).map(|path| (city, path)))
                .collect(),
        )
    }

    /// File backing `city`, if one is configured.
    pub fn path(&self, city: City) -> Option<&PathBuf> {
        self.datasets.get(&city)
    }
}

impl TripSource for CsvTripSource {
    #[instrument(skip(self))]
    fn load(&self, city: City) -> Result<TripTable> {
        let path = self
            .path(city)
            .ok_or_else(|| BikeshareError::dataset_load(city, "no dataset configured"))?;
        let started = Instant::now();

        let file = File::open(path).map_err(|e| {
            BikeshareError::dataset_load_with_source(city, "cannot open file", e).at_path(path)
        })?;
        let table = read_trips(city, BufReader::new(file)).map_err(|e| e.at_path(path))?;

        info!(
            %city,
            path = %path.display(),
            rows = table.len(),
            elapsed = ?started.elapsed(),
            "Dataset loaded"
        );
        Ok(table)
    }
}

/// Serves CSV text held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTripSource {
    datasets: BTreeMap<City, String>,
}

impl MemoryTripSource {
    /// Empty source; every load fails until a dataset is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the CSV text for `city`.
    #[must_use]
    pub fn with_dataset(mut self, city: City, csv: impl Into<String>) -> Self {
        self.datasets.insert(city, csv.into());
        self
    }
}

impl TripSource for MemoryTripSource {
    #[instrument(skip(self))]
    fn load(&self, city: City) -> Result<TripTable> {
        let csv = self
            .datasets
            .get(&city)
            .ok_or_else(|| BikeshareError::dataset_load(city, "no dataset configured"))?;
        let table = read_trips(city, csv.as_bytes())?;
        debug!(%city, rows = table.len(), "In-memory dataset loaded");
        Ok(table)
    }
}

/// Parses a whole city dataset. Any bad row fails the entire load.
pub fn read_trips<R: Read>(city: City, reader: R) -> Result<TripTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| csv_error(city, e))?.clone();
    let columns = Columns::locate(city, &headers)?;

    let mut records = Vec::new();
    for (row_index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(city, e))?;
        let record = columns.parse(city, row_index, &row).map_err(|e| {
            match row.position() {
                Some(position) => e.at_line(position.line()),
                None => e,
            }
        })?;
        records.push(record);
    }

    Ok(TripTable::new(city, columns.has_demographics(), records))
}

fn csv_error(city: City, error: csv::Error) -> BikeshareError {
    let line = error.position().map(csv::Position::line);
    let err = BikeshareError::dataset_load_with_source(city, "malformed CSV", error);
    match line {
        Some(line) => err.at_line(line),
        None => err,
    }
}

/// Field positions of the known columns within a record.
#[derive(Debug, Clone, Copy)]
struct Columns {
    start_time: usize,
    end_time: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    demographics: Option<(usize, usize)>,
}

impl Columns {
    fn locate(city: City, headers: &csv::StringRecord) -> Result<Self> {
        // Column 0 is the positional index of the export
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .skip(1)
                .find(|(_, header)| *header == name)
                .map(|(index, _)| index)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                BikeshareError::dataset_load(city, format!("missing required column '{name}'"))
            })
        };

        let demographics = find(GENDER).zip(find(BIRTH_YEAR));
        debug!(%city, demographics = demographics.is_some(), "Columns located");

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            demographics,
        })
    }

    const fn has_demographics(&self) -> bool {
        self.demographics.is_some()
    }

    fn parse(&self, city: City, row_index: usize, row: &csv::StringRecord) -> Result<TripRecord> {
        let field = |index: usize| row.get(index).unwrap_or_default();
        let required = |index: usize, name: &str| {
            let value = field(index);
            if value.is_empty() {
                Err(BikeshareError::dataset_load(city, format!("empty {name}")))
            } else {
                Ok(value)
            }
        };

        let start_time = parse_timestamp(city, START_TIME, field(self.start_time))?;
        let end_time = parse_timestamp(city, END_TIME, field(self.end_time))?;
        let record = TripRecord::new(
            row_index,
            start_time,
            end_time,
            required(self.start_station, START_STATION)?,
            required(self.end_station, END_STATION)?,
            field(self.user_type),
        );

        match self.demographics {
            Some((gender, birth_year)) => {
                let gender = Some(field(gender))
                    .filter(|value| !value.is_empty())
                    .map(str::to_string);
                let birth_year = parse_birth_year(city, field(birth_year))?;
                Ok(record.with_demographics(gender, birth_year))
            }
            None => Ok(record),
        }
    }
}

fn parse_timestamp(city: City, column: &str, value: &str) -> Result<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| BikeshareError::dataset_load(city, format!("unparseable {column} '{value}'")))
}

/// Birth years are exported as floats (`1992.0`); the fraction is dropped.
#[allow(clippy::cast_possible_truncation)]
fn parse_birth_year(city: City, value: &str) -> Result<Option<i32>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|year| year.is_finite() && year.abs() < f64::from(i32::MAX))
        .map(|year| Some(year.trunc() as i32))
        .ok_or_else(|| {
            BikeshareError::dataset_load(city, format!("unparseable {BIRTH_YEAR} '{value}'"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::test_utils::{create_temp_dir, mock_timestamp, trip_fixtures};

    #[test]
    fn test_reads_chicago_fixture() {
        let table = read_trips(City::Chicago, trip_fixtures::CHICAGO_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), trip_fixtures::chicago_expectations::ROWS);
        assert!(table.has_demographics());

        let first = &table.records()[0];
        assert_eq!(first.row_index, 0);
        assert_eq!(first.start_time, mock_timestamp(2017, 1, 1, 0, 7, 57));
        assert_eq!(first.start_station, trip_fixtures::CLARK_AND_ELM);
        assert_eq!(first.birth_year, Some(1990));

        let blank = &table.records()[5];
        assert!(blank.gender.is_none());
        assert!(blank.birth_year.is_none());
        assert_eq!(blank.user_type, "Customer");
    }

    #[test]
    fn test_washington_has_no_demographics() {
        let table = read_trips(City::Washington, trip_fixtures::WASHINGTON_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert!(!table.has_demographics());
        assert!(table.records().iter().all(|r| r.gender.is_none()));
    }

    #[test]
    fn test_corrupt_row_fails_whole_load_with_line() {
        let err = read_trips(City::Chicago, trip_fixtures::CORRUPT_CSV.as_bytes()).unwrap_err();
        match err {
            BikeshareError::DatasetLoad {
                city, line, message, ..
            } => {
                assert_eq!(city, City::Chicago);
                assert_eq!(line, Some(3));
                assert_eq!(message, "unparseable Start Time 'yesterday-ish'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = ",Start Time,End Time,Start Station,User Type\n0,2017-01-01 00:00:00,2017-01-01 00:01:00,A,Subscriber\n";
        let err = read_trips(City::Washington, csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required column 'End Station'"), "{err}");
    }

    #[test]
    fn test_first_column_is_never_a_data_column() {
        // "Start Time" in column 0 is the index column and is ignored
        let csv = "Start Time,End Time,Start Station,End Station,User Type\n2017-01-01 00:00:00,2017-01-01 00:01:00,A,B,Subscriber\n";
        assert!(read_trips(City::Chicago, csv.as_bytes()).is_err());
    }

    #[test]
    fn test_only_one_demographic_column_means_none() {
        let csv = ",Start Time,End Time,Start Station,End Station,User Type,Gender\n0,2017-01-01 00:00:00,2017-01-01 00:01:00,A,B,Subscriber,Male\n";
        let table = read_trips(City::NewYorkCity, csv.as_bytes()).unwrap();
        assert!(!table.has_demographics());
        assert!(table.records()[0].gender.is_none());
    }

    #[test]
    fn test_timestamp_variants() {
        let expected = mock_timestamp(2017, 5, 4, 3, 2, 1);
        for value in ["2017-05-04 03:02:01", "2017-05-04 03:02:01.250", "2017-05-04T03:02:01"] {
            let parsed = parse_timestamp(City::Chicago, START_TIME, value).unwrap();
            assert_eq!(parsed.date(), expected.date(), "{value}");
            assert_eq!(parsed.time().format("%H:%M:%S").to_string(), "03:02:01");
        }
        assert!(parse_timestamp(City::Chicago, START_TIME, "05/04/2017").is_err());
    }

    #[test]
    fn test_birth_year_truncates_floats() {
        assert_eq!(parse_birth_year(City::Chicago, "1992.0").unwrap(), Some(1992));
        assert_eq!(parse_birth_year(City::Chicago, "1992.9").unwrap(), Some(1992));
        assert_eq!(parse_birth_year(City::Chicago, "").unwrap(), None);
        assert!(parse_birth_year(City::Chicago, "nineteen").is_err());
        assert!(parse_birth_year(City::Chicago, "NaN").is_err());
    }

    #[test]
    fn test_csv_source_reports_path() {
        let dir = create_temp_dir();
        let path = trip_fixtures::write_dataset(dir.path(), "broken.csv", trip_fixtures::CORRUPT_CSV);
        let mut datasets = BTreeMap::new();
        datasets.insert(City::Chicago, path.clone());
        datasets.insert(City::Washington, dir.path().join("absent.csv"));
        let source = CsvTripSource::new(datasets);

        let err = source.load(City::Chicago).unwrap_err();
        match &err {
            BikeshareError::DatasetLoad { path: Some(p), line, .. } => {
                assert_eq!(p, &path);
                assert_eq!(*line, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = source.load(City::Washington).unwrap_err();
        assert!(err.is_dataset_load());
        assert!(err.to_string().contains("absent.csv"), "{err}");

        let err = source.load(City::NewYorkCity).unwrap_err();
        assert!(err.to_string().contains("no dataset configured"), "{err}");
    }

    #[test]
    fn test_csv_source_from_config() {
        let dir = create_temp_dir();
        trip_fixtures::write_dataset(dir.path(), "chicago.csv", trip_fixtures::CHICAGO_CSV);
        let mut config = Config::default();
        config.data.data_dir = dir.path().to_path_buf();

        let source = CsvTripSource::from_config(&config);
        assert_eq!(source.path(City::Chicago), Some(&dir.path().join("chicago.csv")));
        assert_eq!(source.load(City::Chicago).unwrap().len(), 10);
    }

    #[test]
    fn test_memory_source() {
        let source = MemoryTripSource::new().with_dataset(City::Washington, trip_fixtures::WASHINGTON_CSV);
        assert_eq!(source.load(City::Washington).unwrap().len(), 4);
        assert!(source.load(City::Chicago).unwrap_err().is_dataset_load());
    }
}
