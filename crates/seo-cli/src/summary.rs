use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use seo_model::{ExtractedPayload, IssueSeverity, QueryKind, ValidationResult};
use seo_cli::types::{CheckOutcome, OverviewOutcome};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

pub fn print_kinds() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("Bundle key"),
    ]);
    apply_table_style(&mut table);
    for kind in QueryKind::ALL {
        table.add_row(vec![
            kind_cell(kind),
            Cell::new(kind.label()),
            Cell::new(kind.bundle_key()),
        ]);
    }
    println!("{table}");
}

pub fn print_check(outcome: &CheckOutcome) {
    println!("Source: {}", outcome.source.display());
    println!("Kind: {} ({})", outcome.kind, outcome.kind.label());
    println!(
        "Envelope: {}",
        if outcome.well_formed {
            "well-formed"
        } else {
            "malformed"
        }
    );
    println!(
        "Status: {}",
        if outcome.validation.is_valid {
            "valid"
        } else {
            "invalid"
        }
    );
    print_issue_table(&[(outcome.kind, &outcome.validation)]);
    if let Some(data) = &outcome.validation.data {
        println!();
        println!("Data:");
        println!("{}", payload_table(data));
    }
}

pub fn print_overview(outcome: &OverviewOutcome) {
    let report = &outcome.validation;
    println!("Keyword: {}", report.keyword);
    println!("Source: {}", outcome.source.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("Status"),
        header_cell("Data"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (kind, result) in &report.api_status {
        table.add_row(vec![
            kind_cell(*kind),
            Cell::new(kind.label()),
            status_cell(result.is_valid),
            data_cell(result.data.as_ref()),
            count_cell(result.error_count(), Color::Red),
            count_cell(result.warning_count(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} of 5 valid", report.valid_kinds().len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        status_cell(report.is_valid),
        dim_cell("-"),
        count_cell(report.error_count(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(report.warning_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    let statuses: Vec<(QueryKind, &ValidationResult)> = report
        .api_status
        .iter()
        .map(|(kind, result)| (*kind, result))
        .collect();
    print_issue_table(&statuses);
}

fn print_issue_table(statuses: &[(QueryKind, &ValidationResult)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    let mut rows = 0usize;
    for (kind, result) in statuses {
        for (severity, message) in result.issues() {
            table.add_row(vec![
                kind_cell(*kind),
                severity_cell(severity),
                Cell::new(message),
            ]);
            rows += 1;
        }
    }
    if rows == 0 {
        return;
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn payload_table(data: &ExtractedPayload) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match data {
        ExtractedPayload::SearchVolume(payload) => {
            table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
            table.add_row(vec![Cell::new("Search volume"), number_cell(payload.search_volume)]);
            table.add_row(vec![Cell::new("CPC"), number_cell(payload.cpc)]);
            table.add_row(vec![Cell::new("Yearly trend %"), number_cell(payload.trend)]);
        }
        ExtractedPayload::Difficulty(payload) => {
            table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
            table.add_row(vec![Cell::new("Difficulty"), number_cell(payload.difficulty)]);
        }
        ExtractedPayload::Trends(points) => {
            table.set_header(vec![header_cell("Month"), header_cell("Volume")]);
            for point in points {
                table.add_row(vec![Cell::new(&point.month), Cell::new(point.volume)]);
            }
        }
        ExtractedPayload::Demographics(brackets) => {
            table.set_header(vec![header_cell("Age group"), header_cell("Share %")]);
            for bracket in brackets {
                table.add_row(vec![
                    Cell::new(&bracket.age_group),
                    Cell::new(bracket.percentage),
                ]);
            }
        }
        ExtractedPayload::RelatedKeywords(keywords) => {
            table.set_header(vec![
                header_cell("Keyword"),
                header_cell("Volume"),
                header_cell("Competition"),
                header_cell("CPC"),
                header_cell("Trend %"),
                header_cell("Related"),
            ]);
            for keyword in keywords {
                table.add_row(vec![
                    Cell::new(&keyword.keyword),
                    Cell::new(keyword.search_volume),
                    Cell::new(keyword.competition),
                    Cell::new(keyword.cpc),
                    Cell::new(keyword.trend),
                    Cell::new(keyword.related_keywords.join(", ")),
                ]);
            }
        }
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: QueryKind) -> Cell {
    Cell::new(kind.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn status_cell(is_valid: bool) -> Cell {
    if is_valid {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn data_cell(data: Option<&ExtractedPayload>) -> Cell {
    match data {
        Some(payload) if payload.is_empty() => Cell::new("empty").fg(Color::Yellow),
        Some(_) => Cell::new("yes").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    let color = match severity {
        IssueSeverity::Error => Color::Red,
        IssueSeverity::Warning => Color::Yellow,
    };
    Cell::new(severity.label()).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
