//! Run summary table using tabled

use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crate::scraper::RunReport;

const COLUMNS: [&str; 6] = ["country", "channels", "videos", "rows", "skipped", "file"];

/// Render a summary of the run as a table
///
/// One line per country plus a totals line.
pub fn render_summary(report: &RunReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(COLUMNS.map(String::from));

    for country in &report.countries {
        let file = country
            .output_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        builder.push_record([
            country.country_code.clone(),
            country.channels.to_string(),
            country.videos.to_string(),
            country.rows.to_string(),
            country.skipped.to_string(),
            file,
        ]);
    }

    let channels: usize = report.countries.iter().map(|c| c.channels).sum();
    let skipped: usize = report.countries.iter().map(|c| c.skipped).sum();
    builder.push_record([
        "total".to_string(),
        channels.to_string(),
        report.total_videos().to_string(),
        report.total_rows().to_string(),
        skipped.to_string(),
        String::new(),
    ]);

    let mut table = builder.build();
    table.with(Style::psql());
    table.with(Modify::new(Columns::new(1..5)).with(Alignment::right()));
    table.to_string()
}
