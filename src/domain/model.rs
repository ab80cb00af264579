use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One build event, as parsed from a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub customer_id: String,
    pub contract_id: String,
    pub geozone: String,
    pub team_code: String,
    pub project_code: String,
    pub build_duration_seconds: u64,
}

/// The three mappings derived from one pass over the records.
///
/// Keys are ordered so every report iterates them the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildAggregates {
    pub contract_customers: BTreeMap<String, BTreeSet<String>>,
    pub zone_customers: BTreeMap<String, BTreeSet<String>>,
    pub zone_durations: BTreeMap<String, Vec<u64>>,
}

/// The four fixed reports, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    ContractCustomerCount,
    ZoneCustomerCount,
    ZoneAverageDuration,
    ZoneCustomerList,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ContractCustomerCount,
        ReportKind::ZoneCustomerCount,
        ReportKind::ZoneAverageDuration,
        ReportKind::ZoneCustomerList,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ReportKind::ContractCustomerCount => {
                "Number of unique customerIds for each contractId:"
            }
            ReportKind::ZoneCustomerCount => "Number of unique customerIds for each geozone:",
            ReportKind::ZoneAverageDuration => "Average build duration for each geozone:",
            ReportKind::ZoneCustomerList => "List of unique customerIds for each geozone:",
        }
    }

    /// Label printed before each entry key in text output.
    pub fn key_label(&self) -> &'static str {
        match self {
            ReportKind::ContractCustomerCount => "Contract ID",
            _ => "Geozone",
        }
    }

    /// Stable identifier used by the csv format.
    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::ContractCustomerCount => "contract_customer_count",
            ReportKind::ZoneCustomerCount => "zone_customer_count",
            ReportKind::ZoneAverageDuration => "zone_average_duration",
            ReportKind::ZoneCustomerList => "zone_customer_list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportValue {
    UniqueCustomers(usize),
    AverageSeconds(f64),
    Customers(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub key: String,
    pub value: ReportValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub kind: ReportKind,
    pub header: &'static str,
    pub entries: Vec<ReportEntry>,
}
