use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use temperature_grid::analyzers::DatasetAnalyzer;
use temperature_grid::processors::{RowNormalizer, TemperaturePipeline};
use temperature_grid::readers::CsvRowReader;
use temperature_grid::{PipelineConfig, RawRow};

// Synthetic daily rows with a seasonal curve, one gap every 17 days and a
// malformed row every 101 days
fn create_test_rows(start_year: i32, years: i32) -> Vec<RawRow> {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap();
    let days = (years as i64) * 365;
    let mut rows = Vec::with_capacity(days as usize);

    for offset in 0..days {
        if offset % 17 == 0 {
            continue;
        }
        let date = start + Duration::days(offset);
        let season = ((offset % 365) as f64 / 365.0 * std::f64::consts::TAU).sin();
        let max = 18.0 + 12.0 * season;
        let min = max - 9.5;

        if offset % 101 == 0 {
            rows.push(RawRow::daily(date.format("%Y-%m-%d").to_string(), "n/a", min));
        } else {
            rows.push(RawRow::daily(date.format("%Y-%m-%d").to_string(), max, min));
        }
    }

    rows
}

fn create_test_csv(rows: usize) -> String {
    let start = NaiveDate::from_ymd_opt(1997, 1, 1).unwrap();
    let mut csv = String::from("date,max_temperature,min_temperature\n");
    for offset in 0..rows {
        let date = start + Duration::days(offset as i64);
        csv.push_str(&format!("{},{:.1},{:.1}\n", date.format("%Y-%m-%d"), 20.5, 8.25));
    }
    csv
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for years in [1, 10, 21] {
        let rows = create_test_rows(1997, years);
        let config = PipelineConfig::new(1997, 1997 + years - 1).unwrap();
        let pipeline = TemperaturePipeline::new(config);

        group.bench_with_input(BenchmarkId::new("process", years), &rows, |b, rows| {
            b.iter(|| black_box(pipeline.process(black_box(rows))))
        });
    }

    group.finish();
}

fn benchmark_normalizer(c: &mut Criterion) {
    let rows = create_test_rows(1997, 21);
    let normalizer = RowNormalizer::new(PipelineConfig::new(1997, 2017).unwrap());

    c.bench_function("normalize_all_21_years", |b| {
        b.iter(|| black_box(normalizer.normalize_all(black_box(&rows))))
    });
}

fn benchmark_csv_reader(c: &mut Criterion) {
    let csv = create_test_csv(7665);
    let reader = CsvRowReader::new();

    c.bench_function("csv_read_7665_rows", |b| {
        b.iter(|| black_box(reader.read_str(black_box(&csv)).unwrap()))
    });
}

fn benchmark_analyzer(c: &mut Criterion) {
    let rows = create_test_rows(1997, 21);
    let dataset = TemperaturePipeline::new(PipelineConfig::new(1997, 2017).unwrap()).process(&rows);
    let analyzer = DatasetAnalyzer::new();

    c.bench_function("analyze_21_years", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&dataset))))
    });
}

criterion_group!(
    benches,
    benchmark_pipeline,
    benchmark_normalizer,
    benchmark_csv_reader,
    benchmark_analyzer
);
criterion_main!(benches);
