use super::OptimizeError;
use itertools::Itertools;
use std::collections::HashMap;

/// required column names, in their whitespace-collapsed form.
pub const ADDRESS_COLUMN: &str = "Address";
pub const LAB_CATEGORY_COLUMN: &str = "Lab Category #";
pub const CLIENT_COLUMN: &str = "Client";

/// one usable row of the uploaded service call sheet. the address is kept
/// raw here; normalization happens just before geocoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub address: String,
    pub client: String,
    pub lab_category: Option<String>,
}

/// reads service call rows from CSV bytes. header names are
/// whitespace-collapsed before the required column check, so ragged
/// spreadsheet exports ("Lab Category  #") still resolve. extra columns are
/// ignored and rows with a blank address are dropped.
pub fn read_service_calls(csv: &[u8]) -> Result<Vec<RawRecord>, OptimizeError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(csv);
    let headers = build_header_lookup(&mut reader)?;

    let required = [ADDRESS_COLUMN, LAB_CATEGORY_COLUMN, CLIENT_COLUMN];
    let missing = required
        .iter()
        .filter(|column| !headers.contains_key(**column))
        .join(", ");
    if !missing.is_empty() {
        return Err(OptimizeError::MissingColumns(missing));
    }
    let address_index = headers[ADDRESS_COLUMN];
    let lab_category_index = headers[LAB_CATEGORY_COLUMN];
    let client_index = headers[CLIENT_COLUMN];

    let mut records = vec![];
    let mut total_rows: usize = 0;
    for (index, row) in reader.records().enumerate() {
        total_rows += 1;
        let record =
            row.map_err(|e| OptimizeError::CsvReadError(format!("failure on row {index}: {e}")))?;
        let address = record.get(address_index).unwrap_or("");
        if address.trim().is_empty() {
            continue;
        }
        records.push(RawRecord {
            address: String::from(address),
            client: record.get(client_index).unwrap_or("").trim().to_string(),
            lab_category: record.get(lab_category_index).map(String::from),
        });
    }
    log::info!(
        "{} service calls with addresses out of {} rows",
        records.len(),
        total_rows
    );
    Ok(records)
}

/// maps whitespace-collapsed header names to column indices.
fn build_header_lookup(
    reader: &mut csv::Reader<&[u8]>,
) -> Result<HashMap<String, usize>, OptimizeError> {
    let headers = reader
        .headers()
        .map_err(|e| OptimizeError::CsvReadError(format!("failure retrieving headers: {e}")))?;
    let lookup = headers
        .iter()
        .enumerate()
        .map(|(index, column)| (column.split_whitespace().join(" "), index))
        .collect::<HashMap<_, _>>();
    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use super::read_service_calls;
    use crate::app::optimize::OptimizeError;

    #[test]
    fn reads_rows_and_collapses_ragged_headers() {
        let csv = "Address, Lab Category  # ,Client\n1 Oak St,A,Acme\n2 Elm St,,Birch Co\n";
        let records = read_service_calls(csv.as_bytes()).expect("should read");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].address, "1 Oak St");
        assert_eq!(records[0].client, "Acme");
        assert_eq!(records[0].lab_category.as_deref(), Some("A"));
        assert_eq!(records[1].lab_category.as_deref(), Some(""));
    }

    #[test]
    fn drops_rows_with_blank_addresses() {
        let csv = "Address,Lab Category #,Client\n,A,Acme\n   ,B,Birch Co\n3 Pine St,,Cedar\n";
        let records = read_service_calls(csv.as_bytes()).expect("should read");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].client, "Cedar");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "Notes,Address,Lab Category #,Client,Phone\nx,4 Fir St,,Dogwood,555\n";
        let records = read_service_calls(csv.as_bytes()).expect("should read");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "4 Fir St");
        assert_eq!(records[0].client, "Dogwood");
    }

    #[test]
    fn missing_required_columns_are_named_in_the_error() {
        let csv = "Address,Notes\n1 Oak St,x\n";
        match read_service_calls(csv.as_bytes()) {
            Err(OptimizeError::MissingColumns(missing)) => {
                assert!(missing.contains("Lab Category #"));
                assert!(missing.contains("Client"));
                assert!(!missing.contains("Address"));
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }
}
