//! CSV rendering for service record exports.
//!
//! Fields are quoted only when they contain a comma, a double quote, or a
//! line break; everything else is written byte-for-byte.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::domain::ServiceRecord;

/// Header row for service record exports, without the line terminator.
pub const SERVICE_RECORD_HEADER: &str = "id,vin,customer_name,service_date,description,mechanic";

/// Quote a single field if it needs it, doubling embedded quotes.
#[must_use]
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if !field.contains([',', '"', '\n', '\r']) {
        return Cow::Borrowed(field);
    }

    let mut out = String::with_capacity(field.len() + 4);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Write one service record as a CSV line terminated by `\n`.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_service_record<W: Write>(out: &mut W, record: &ServiceRecord) -> io::Result<()> {
    writeln!(
        out,
        "{},{},{},{},{},{}",
        record.id,
        escape_field(&record.vin),
        escape_field(&record.customer_name),
        escape_field(&record.service_date),
        escape_field(&record.description),
        escape_field(&record.mechanic),
    )
}

/// Write the header row.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SERVICE_RECORD_HEADER}")
}

/// Write the header followed by every record, in the order given.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_service_records<W: Write>(out: &mut W, records: &[ServiceRecord]) -> io::Result<()> {
    write_header(out)?;
    for record in records {
        write_service_record(out, record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_field_is_untouched() {
        let field = "Oil change and filter replacement";
        let escaped = escape_field(field);
        assert!(matches!(escaped, Cow::Borrowed(_)));
        assert_eq!(escaped, field);
    }

    #[test]
    fn empty_field_is_not_quoted() {
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn comma_forces_quotes() {
        assert_eq!(escape_field("Doe, John"), "\"Doe, John\"");
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(escape_field("the \"good\" oil"), "\"the \"\"good\"\" oil\"");
    }

    #[test]
    fn line_breaks_force_quotes() {
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(escape_field("line1\rline2"), "\"line1\rline2\"");
    }

    #[test]
    fn mixed_special_characters() {
        assert_eq!(
            escape_field("a,\"b\"\nc"),
            "\"a,\"\"b\"\"\nc\""
        );
    }

    #[test]
    fn semicolons_and_spaces_are_not_special() {
        assert_eq!(escape_field(" padded; value "), " padded; value ");
    }

    #[test]
    fn record_line_leaves_id_unquoted() {
        let mut record = ServiceRecord::new(
            "JT123TESTVIN00001",
            "Doe, John",
            "2025-09-16",
            "Oil change",
            "A. Mechanic",
        );
        record.id = 12;

        let mut buf = Vec::new();
        write_service_record(&mut buf, &record).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "12,JT123TESTVIN00001,\"Doe, John\",2025-09-16,Oil change,A. Mechanic\n"
        );
    }

    #[test]
    fn header_is_written_even_without_rows() {
        let mut buf = Vec::new();
        write_service_records(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,vin,customer_name,service_date,description,mechanic\n"
        );
    }
}
