//! `stats`, `search` and `sample` subcommands.

use chrono::{DateTime, Duration, Utc};
use eqd_core::{
    paginate::{page_window, total_pages, Page, PageCursor},
    search::filter,
    stats::{aggregate, count_recent, FieldSummary},
    worker::{Operation, ProjectParams, SampleParams, WorkerRequest, WorkerResponse},
    EarthquakeRecord, NumericField, PAGE_WINDOW, RECENT_WINDOW_HOURS,
};
use eqd_utils::{
    dates::format_timestamp,
    numbers::{format_count, format_fixed},
};
use log::info;

use crate::worker::WorkerClient;

pub fn run_stats(records: &[EarthquakeRecord], now: DateTime<Utc>) {
    print!("{}", stats_report(records, now));
}

pub fn stats_report(records: &[EarthquakeRecord], now: DateTime<Utc>) -> String {
    let Some(stats) = aggregate(records) else {
        return "No earthquake data.\n".to_string();
    };
    let recent = count_recent(records, now, Duration::hours(RECENT_WINDOW_HOURS));
    let summary_line = |label: &str, summary: &FieldSummary| {
        format!(
            "{:<10} min {:>8}  mean {:>8}  max {:>8}  ({} values)\n",
            label,
            format_fixed(summary.min, 2),
            format_fixed(summary.mean, 2),
            format_fixed(summary.max, 2),
            format_count(summary.count),
        )
    };
    let mut out = format!("Total events: {}\n", format_count(stats.count));
    out.push_str(&summary_line("Magnitude", &stats.magnitude));
    out.push_str(&summary_line("Depth (km)", &stats.depth));
    out.push_str(&format!(
        "Recent {}h: {}\n",
        RECENT_WINDOW_HOURS,
        format_count(recent)
    ));
    out
}

pub fn run_search(records: &[EarthquakeRecord], query: &str, page: usize, page_size: usize) {
    let matches = filter(records, query);
    let mut cursor = PageCursor::new(page_size);
    cursor.go_to(page, total_pages(matches.len(), page_size));
    let page = cursor.slice(&matches);
    info!(
        "[EQD] search: '{}' matched {} of {} records",
        query,
        matches.len(),
        records.len()
    );
    print!("{}", search_report(&page, records.len()));
}

/// Caption, rows and page window for one page of borrowed matches.
pub fn search_report(page: &Page<'_, &EarthquakeRecord>, unfiltered: usize) -> String {
    if page.total_items == 0 {
        return "No earthquakes found\n".to_string();
    }
    let (first, last, of) = page.showing();
    let mut out = format!("Showing {}-{} of {} earthquakes", first, last, format_count(of));
    if of != unfiltered {
        out.push_str(&format!(" (filtered from {})", format_count(unfiltered)));
    }
    out.push('\n');

    out.push_str(&format!(
        "{:<23}  {:<40}  {:>5}  {:>8}  {:>9}  {:>10}  {:<7}  {}\n",
        "Time", "Location", "Mag", "Depth", "Latitude", "Longitude", "MagType", "Status"
    ));
    for record in page.items {
        out.push_str(&format!(
            "{:<23}  {:<40}  {:>5}  {:>8}  {:>9}  {:>10}  {:<7}  {}\n",
            format_timestamp(record.time),
            record.place,
            format_fixed(Some(record.magnitude), 2),
            format_fixed(record.depth, 2),
            format_fixed(record.latitude, 2),
            format_fixed(record.longitude, 2),
            record.mag_type,
            record.status,
        ));
    }

    let buttons: Vec<String> = page_window(page.page, page.total_pages, PAGE_WINDOW)
        .map(|p| {
            if p == page.page {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect();
    out.push_str(&format!(
        "Page {} of {}: {}\n",
        page.page,
        page.total_pages,
        buttons.join(" ")
    ));
    out
}

/// Sample and project through the worker, printing the chart points.
pub async fn run_sample(
    records: Vec<EarthquakeRecord>,
    max_points: usize,
    pins: Vec<String>,
    x: NumericField,
    y: NumericField,
) -> anyhow::Result<()> {
    let mut worker = WorkerClient::spawn()?;
    let total = records.len();

    let sampled = match worker
        .request(Operation::Sample, |ticket| WorkerRequest::Sample {
            ticket,
            payload: records,
            parameters: SampleParams {
                max_points,
                pinned_ids: pins,
            },
        })
        .await?
    {
        WorkerResponse::SampleComplete { result, .. } => result,
        other => anyhow::bail!("unexpected worker response {:?}", other.operation()),
    };
    info!("[EQD] sample: {} of {} records kept", sampled.len(), total);

    let points = match worker
        .request(Operation::Project, |ticket| WorkerRequest::Project {
            ticket,
            payload: sampled,
            parameters: ProjectParams { x, y },
        })
        .await?
    {
        WorkerResponse::ProjectComplete { result, .. } => result,
        other => anyhow::bail!("unexpected worker response {:?}", other.operation()),
    };
    worker.shutdown();

    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use eqd_core::paginate::paginate;

    fn records(n: usize) -> Vec<EarthquakeRecord> {
        (0..n)
            .map(|i| {
                let mut r = EarthquakeRecord::new(format!("ev{}", i), 1.0 + i as f64 / 10.0);
                r.place = format!("{} km N of Town, CA", i);
                r.depth = Some(i as f64);
                r
            })
            .collect()
    }

    #[test]
    fn test_stats_report() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let mut data = records(3);
        data[0].time = Some(now - Duration::hours(1));
        let report = stats_report(&data, now);
        assert!(report.contains("Total events: 3"));
        assert!(report.contains("max     1.20"));
        assert!(report.contains("Recent 24h: 1"));
    }

    #[test]
    fn test_stats_report_empty() {
        assert_eq!(stats_report(&[], Utc::now()), "No earthquake data.\n");
    }

    #[test]
    fn test_search_report_caption_and_window() {
        let data = records(120);
        let matches: Vec<&EarthquakeRecord> = data.iter().collect();
        let page = paginate(&matches, 50, 2);
        let report = search_report(&page, 200);
        assert!(report.starts_with("Showing 51-100 of 120 earthquakes (filtered from 200)\n"));
        assert!(report.contains("Page 2 of 3: 1 [2] 3\n"));
        assert!(report.contains("50 km N of Town, CA"));
    }

    #[test]
    fn test_search_report_no_matches() {
        let matches: Vec<&EarthquakeRecord> = Vec::new();
        let page = paginate(&matches, 50, 1);
        assert_eq!(search_report(&page, 10), "No earthquakes found\n");
    }

    #[test]
    fn test_search_report_pages_filter_output() {
        let data = records(30);
        let matches = filter(&data, "29 km");
        let page = paginate(&matches, 10, 1);
        let report = search_report(&page, data.len());
        assert!(report.starts_with("Showing 1-1 of 1 earthquakes (filtered from 30)\n"));
        assert!(report.contains("29 km N of Town, CA"));
        assert!(report.contains("Page 1 of 1: [1]\n"));
    }
}
