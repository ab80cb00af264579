use crate::config::OutputFormat;
use crate::core::aggregator::average;
use crate::domain::model::{BuildAggregates, ReportEntry, ReportKind, ReportSection, ReportValue};
use crate::utils::error::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Builds the four report sections, in output order.
pub fn build_sections(aggregates: &BuildAggregates) -> Vec<ReportSection> {
    ReportKind::ALL
        .iter()
        .map(|&kind| ReportSection {
            kind,
            header: kind.header(),
            entries: build_entries(kind, aggregates),
        })
        .collect()
}

fn build_entries(kind: ReportKind, aggregates: &BuildAggregates) -> Vec<ReportEntry> {
    match kind {
        ReportKind::ContractCustomerCount => count_entries(&aggregates.contract_customers),
        ReportKind::ZoneCustomerCount => count_entries(&aggregates.zone_customers),
        ReportKind::ZoneAverageDuration => aggregates
            .zone_durations
            .iter()
            .map(|(zone, durations)| ReportEntry {
                key: zone.clone(),
                value: ReportValue::AverageSeconds(average(durations)),
            })
            .collect(),
        ReportKind::ZoneCustomerList => aggregates
            .zone_customers
            .iter()
            .map(|(zone, customers)| ReportEntry {
                key: zone.clone(),
                value: ReportValue::Customers(customers.iter().cloned().collect()),
            })
            .collect(),
    }
}

fn count_entries(groups: &BTreeMap<String, BTreeSet<String>>) -> Vec<ReportEntry> {
    groups
        .iter()
        .map(|(key, customers)| ReportEntry {
            key: key.clone(),
            value: ReportValue::UniqueCustomers(customers.len()),
        })
        .collect()
}

/// Formats seconds the way the text report prints them: `2216.0s`, `2216.5s`.
pub fn format_seconds(seconds: f64) -> String {
    // Debug keeps the fractional part for whole numbers
    format!("{:?}s", seconds)
}

pub fn render(sections: &[ReportSection], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(sections)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
        OutputFormat::Csv => render_csv(sections),
    }
}

pub fn render_text(sections: &[ReportSection]) -> String {
    let blocks: Vec<String> = sections
        .iter()
        .map(|section| {
            let mut lines = vec![section.header.to_string()];
            let label = section.kind.key_label();
            for entry in &section.entries {
                let line = match &entry.value {
                    ReportValue::UniqueCustomers(count) => {
                        format!("{}: {}, Unique Customers: {}", label, entry.key, count)
                    }
                    ReportValue::AverageSeconds(seconds) => format!(
                        "{}: {}, Average Build Duration: {}",
                        label,
                        entry.key,
                        format_seconds(*seconds)
                    ),
                    ReportValue::Customers(customers) => format!(
                        "{}: {}, Customers: [{}]",
                        label,
                        entry.key,
                        customers.join(", ")
                    ),
                };
                lines.push(line);
            }
            lines.join("\n")
        })
        .collect();

    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}

pub fn render_csv(sections: &[ReportSection]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["report", "key", "value"])?;

    for section in sections {
        for entry in &section.entries {
            let value = match &entry.value {
                ReportValue::UniqueCustomers(count) => count.to_string(),
                ReportValue::AverageSeconds(seconds) => format_seconds(*seconds),
                ReportValue::Customers(customers) => customers.join(";"),
            };
            writer.write_record([section.kind.id(), entry.key.as_str(), value.as_str()])?;
        }
    }

    let data = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
