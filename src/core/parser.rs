use crate::domain::model::BuildRecord;
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_suffixed_integer, validate_field_count, validate_non_empty_field,
};

pub const FIELD_COUNT: usize = 6;
pub const DURATION_SUFFIX: char = 's';

/// Parses one `customerId,contractId,geozone,teamCode,projectCode,<n>s` line.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_record(line_number: usize, line: &str) -> Result<BuildRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    validate_field_count(line_number, line, fields.len(), FIELD_COUNT)?;

    let [customer_id, contract_id, geozone, team_code, project_code, duration] =
        [fields[0], fields[1], fields[2], fields[3], fields[4], fields[5]];

    validate_non_empty_field(line_number, line, "customerId", customer_id)?;
    validate_non_empty_field(line_number, line, "contractId", contract_id)?;
    validate_non_empty_field(line_number, line, "geozone", geozone)?;

    let build_duration_seconds =
        parse_suffixed_integer(line_number, line, "build duration", duration, DURATION_SUFFIX)?;

    Ok(BuildRecord {
        customer_id: customer_id.to_string(),
        contract_id: contract_id.to_string(),
        geozone: geozone.to_string(),
        team_code: team_code.to_string(),
        project_code: project_code.to_string(),
        build_duration_seconds,
    })
}

/// Parses every line in order, failing on the first malformed one.
pub fn parse_records<S: AsRef<str>>(lines: &[S]) -> Result<Vec<BuildRecord>> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| parse_record(index + 1, line.as_ref()))
        .collect()
}
