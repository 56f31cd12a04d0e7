use std::error::Error;

/// Serializes `items` as CSV, with a header row
/// # Error
/// Errors if an item cannot be represented as a CSV row
pub fn serialize(
    items: impl Iterator<Item = impl serde::Serialize>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item)?;
    }
    Ok(wtr.into_inner()?)
}
