//! CSV import/export for the external-staff rate catalog.
//!
//! The header set is a fixed contract shared with the spreadsheet templates
//! the logistics team circulates; imports refuse files missing any column.

use std::io::{Read, Write};

use crate::catalog::StaffRate;
use crate::errors::OpsError;

pub const STAFF_RATE_HEADERS: [&str; 5] =
    ["id", "proveedorId", "nombreProveedor", "categoria", "precioHora"];

/// Parses a staff-rate catalog CSV. Blank ids get a generated `TPE-` id,
/// unparseable rates fall back to 0, a leading UTF-8 BOM is tolerated.
pub fn import_staff_rates<R: Read>(reader: R, delimiter: u8) -> Result<Vec<StaffRate>, OpsError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();
    for required in STAFF_RATE_HEADERS {
        if !headers.iter().any(|header| header == required) {
            return Err(OpsError::InvalidInput(format!(
                "CSV is missing required column `{}`",
                required
            )));
        }
    }
    let column = |name: &str| headers.iter().position(|header| header == name);
    let id_col = column("id").unwrap_or_default();
    let provider_col = column("proveedorId").unwrap_or_default();
    let provider_name_col = column("nombreProveedor").unwrap_or_default();
    let category_col = column("categoria").unwrap_or_default();
    let rate_col = column("precioHora").unwrap_or_default();

    let mut rates = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let field = |col: usize| row.get(col).unwrap_or_default().to_string();
        let id = field(id_col);
        rates.push(StaffRate {
            id: if id.is_empty() {
                generated_id(index)
            } else {
                id
            },
            provider_id: non_empty(field(provider_col)),
            provider_name: non_empty(field(provider_name_col)),
            category: field(category_col),
            hourly_rate: field(rate_col).replace(',', ".").parse().unwrap_or(0.0),
        });
    }
    Ok(rates)
}

/// Writes the catalog with the exact canonical header order.
pub fn export_staff_rates<W: Write>(writer: W, rates: &[StaffRate]) -> Result<(), OpsError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(STAFF_RATE_HEADERS)?;
    for rate in rates {
        csv_writer.write_record([
            rate.id.as_str(),
            rate.provider_id.as_deref().unwrap_or_default(),
            rate.provider_name.as_deref().unwrap_or_default(),
            rate.category.as_str(),
            &format!("{}", rate.hourly_rate),
        ])?;
    }
    csv_writer.flush().map_err(OpsError::Io)?;
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn generated_id(index: usize) -> String {
    format!("TPE-{}-{}", chrono::Utc::now().timestamp_millis(), index)
}
