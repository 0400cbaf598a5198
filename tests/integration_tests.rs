use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use temperature_grid::analyzers::DatasetAnalyzer;
use temperature_grid::processors::TemperaturePipeline;
use temperature_grid::readers::{load_rows, CsvRowReader};
use temperature_grid::utils::constants::{DAYS_IN_MONTH, MONTH_NAMES};
use temperature_grid::writers::JsonWriter;
use temperature_grid::{process_rows, DailyTemp, PipelineConfig, ProcessedDataset, RawRow};

fn config(start_year: i32, end_year: i32) -> PipelineConfig {
    PipelineConfig::new(start_year, end_year).expect("valid year range")
}

#[test]
fn test_two_reading_january_scenario() {
    let rows = vec![
        RawRow::daily("2010-01-01", 5.0, -2.0),
        RawRow::daily("2010-01-03", 7.0, 0.0),
    ];

    let dataset = process_rows(&rows, config(2010, 2010));
    let january = dataset.cell(2010, 0).expect("January cell");

    assert_eq!(january.month_name, "January");
    assert_eq!(january.avg_max, Some(7.0));
    assert_eq!(january.avg_min, Some(-2.0));
    assert_eq!(january.daily_temps.len(), 31);
    assert_eq!(january.daily_temps[0], DailyTemp::observed(1, 5.0, -2.0));
    assert_eq!(january.daily_temps[1], DailyTemp::missing(2));
    assert_eq!(january.daily_temps[2], DailyTemp::observed(3, 7.0, 0.0));
    assert!(january.daily_temps[3..].iter().all(DailyTemp::is_missing));
}

#[test]
fn test_grid_shape_for_multi_year_range() {
    let dataset = process_rows(&[], config(1997, 2017));

    assert_eq!(dataset.years, (1997..=2017).collect::<Vec<_>>());
    assert_eq!(dataset.months, MONTH_NAMES.map(String::from).to_vec());
    assert_eq!(dataset.data.len(), 21 * 12);

    for (i, cell) in dataset.data.iter().enumerate() {
        assert_eq!(cell.year, 1997 + (i / 12) as i32);
        assert_eq!(cell.month_index, (i % 12) as u32);
        assert_eq!(cell.daily_temps.len() as u32, DAYS_IN_MONTH[i % 12]);
        assert_eq!(cell.avg_max, None);
        assert_eq!(cell.avg_min, None);
    }
}

#[test]
fn test_february_has_28_days_in_leap_year() {
    let rows = vec![
        RawRow::daily("2012-02-28", 10.0, 2.0),
        RawRow::daily("2012-02-29", 15.0, -5.0),
    ];

    let dataset = process_rows(&rows, config(2012, 2012));
    let february = dataset.cell(2012, 1).unwrap();

    assert_eq!(february.daily_temps.len(), 28);
    assert_eq!(february.daily_temps[27], DailyTemp::observed(28, 10.0, 2.0));
    // The 29th has no daily slot but still counts toward the month's extremes
    assert_eq!(february.avg_max, Some(15.0));
    assert_eq!(february.avg_min, Some(-5.0));
}

#[test]
fn test_extremes_not_means() {
    let rows = vec![
        RawRow::daily("2010-05-01", 10.0, 1.0),
        RawRow::daily("2010-05-02", 20.0, 2.0),
        RawRow::daily("2010-05-03", 30.0, 3.0),
    ];

    let dataset = process_rows(&rows, config(2010, 2010));
    let may = dataset.cell(2010, 4).unwrap();

    assert_eq!(may.avg_max, Some(30.0));
    assert_eq!(may.avg_min, Some(1.0));
}

#[test]
fn test_out_of_range_rows_contribute_nothing() {
    let in_range = vec![RawRow::daily("2010-03-01", 12.0, 4.0)];
    let mut with_outliers = in_range.clone();
    with_outliers.push(RawRow::daily("2009-03-01", 40.0, -40.0));
    with_outliers.push(RawRow::daily("2011-03-01", 40.0, -40.0));

    let expected = process_rows(&in_range, config(2010, 2010));
    let actual = process_rows(&with_outliers, config(2010, 2010));

    assert_eq!(actual, expected);
}

#[test]
fn test_malformed_rows_are_dropped_without_affecting_others() {
    let rows = vec![
        RawRow::daily("bad-date", 40.0, -40.0),
        RawRow::daily("2010-03-01", 12.0, 4.0),
        RawRow::daily("2010-03-02", "n/a", 4.0),
        RawRow::new().with("date", "2010-03-03"),
        RawRow::daily("2010-03-04", "13.5", "5"),
    ];

    let (dataset, report) =
        TemperaturePipeline::new(config(2010, 2010)).process_with_report(&rows, None);
    let march = dataset.cell(2010, 2).unwrap();

    assert_eq!(report.total_rows, 5);
    assert_eq!(report.accepted_readings, 2);
    assert_eq!(report.rejected_rows(), 3);
    assert_eq!(march.observed_days(), 2);
    assert_eq!(march.daily_temps[1], DailyTemp::missing(2));
    assert_eq!(march.daily_temps[2], DailyTemp::missing(3));
    assert_eq!(march.daily_temps[3], DailyTemp::observed(4, 13.5, 5.0));
    assert_eq!(march.avg_max, Some(13.5));
    assert_eq!(march.avg_min, Some(4.0));
}

#[test]
fn test_duplicate_day_last_write_wins() {
    let rows = vec![
        RawRow::daily("2010-08-10", 35.0, 20.0),
        RawRow::daily("2010-08-10", 25.0, 15.0),
    ];

    let dataset = process_rows(&rows, config(2010, 2010));
    let august = dataset.cell(2010, 7).unwrap();

    assert_eq!(august.daily_temps[9], DailyTemp::observed(10, 25.0, 15.0));
    assert_eq!(august.avg_max, Some(25.0));
    assert_eq!(august.avg_min, Some(15.0));
}

#[test]
fn test_pipeline_is_idempotent() {
    let rows = vec![
        RawRow::daily("2010-01-01", 5.0, -2.0),
        RawRow::daily("2010-06-15", "24.44", "12.06"),
        RawRow::daily("2011-12-31", -1.0, -9.95),
    ];
    let pipeline = TemperaturePipeline::new(config(2010, 2011));

    let first = pipeline.process(&rows);
    let second = pipeline.process(&rows);

    assert_eq!(first, second);
    assert_eq!(first.cell(2010, 5).unwrap().avg_max, Some(24.4));
    assert_eq!(first.cell(2010, 5).unwrap().avg_min, Some(12.1));
    assert_eq!(first.cell(2011, 11).unwrap().avg_min, Some(-10.0));
}

#[test]
fn test_csv_file_to_json_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,max_temperature,min_temperature").unwrap();
    writeln!(file, "2010-01-01,5,-2").unwrap();
    writeln!(file, "2010-01-03,7,0").unwrap();
    writeln!(file, "not-a-date,1,1").unwrap();

    let rows = CsvRowReader::new().read_path(file.path()).unwrap();
    let dataset = process_rows(&rows, config(2010, 2010));

    let json = JsonWriter::new().to_string(&dataset).unwrap();
    let parsed: ProcessedDataset = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, dataset);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["data"][0]["avgMax"], 7.0);
    assert_eq!(value["data"][0]["dailyTemps"][1]["maxTemp"], serde_json::Value::Null);
}

#[test]
fn test_timestamped_and_overflowing_dates_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,max_temperature,min_temperature").unwrap();
    writeln!(file, "2010-01-06 00:00:00,8,1").unwrap();
    writeln!(file, "2010-01-07T00:00,9,2").unwrap();
    writeln!(file, "2010-02-30,12,4").unwrap();
    writeln!(file, "2010-12-32,3,-1").unwrap();

    let rows = CsvRowReader::new().read_path(file.path()).unwrap();
    let dataset = process_rows(&rows, config(2010, 2010));

    let january = dataset.cell(2010, 0).unwrap();
    assert_eq!(january.daily_temps[5], DailyTemp::observed(6, 8.0, 1.0));
    assert_eq!(january.daily_temps[6], DailyTemp::observed(7, 9.0, 2.0));
    assert_eq!(january.avg_max, Some(9.0));

    let march = dataset.cell(2010, 2).unwrap();
    assert_eq!(march.daily_temps[1], DailyTemp::observed(2, 12.0, 4.0));
    assert!(dataset.cell(2010, 1).unwrap().daily_temps.iter().all(DailyTemp::is_missing));
    assert!(dataset.cell(2010, 11).unwrap().daily_temps.iter().all(DailyTemp::is_missing));
}

#[tokio::test]
async fn test_async_load_then_analyze() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,max_temperature,min_temperature").unwrap();
    writeln!(file, "2008-07-01,31.2,18.4").unwrap();
    writeln!(file, "2008-07-02,29.8,17.1").unwrap();
    writeln!(file, "2009-01-15,2.5,-6.3").unwrap();

    let rows = load_rows(file.path()).await.unwrap();
    let dataset = process_rows(&rows, config(2008, 2009));
    let stats = DatasetAnalyzer::new().analyze(&dataset);

    assert_eq!(stats.total_cells, 24);
    assert_eq!(stats.cells_with_data, 2);
    assert_eq!(stats.observed_days, 3);
    assert_eq!(stats.hottest_cell.as_deref(), Some("July 2008"));
    assert_eq!(stats.coldest_cell.as_deref(), Some("January 2009"));
}
