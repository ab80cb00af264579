use crate::domain::model::{BuildAggregates, BuildRecord};

/// Builds all three mappings in a single pass over `records`.
pub fn aggregate(records: &[BuildRecord]) -> BuildAggregates {
    let mut aggregates = BuildAggregates::default();

    for record in records {
        aggregates
            .contract_customers
            .entry(record.contract_id.clone())
            .or_default()
            .insert(record.customer_id.clone());

        aggregates
            .zone_customers
            .entry(record.geozone.clone())
            .or_default()
            .insert(record.customer_id.clone());

        aggregates
            .zone_durations
            .entry(record.geozone.clone())
            .or_default()
            .push(record.build_duration_seconds);
    }

    tracing::debug!(
        "Aggregated {} records into {} contracts and {} geozones",
        records.len(),
        aggregates.contract_customers.len(),
        aggregates.zone_customers.len()
    );

    aggregates
}

/// Arithmetic mean of `durations`; `0.0` for an empty list.
pub fn average(durations: &[u64]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    let total: u128 = durations.iter().map(|&d| u128::from(d)).sum();
    total as f64 / durations.len() as f64
}
