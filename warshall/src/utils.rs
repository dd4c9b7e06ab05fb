use std::io::Write;

use csv_core::ReadFieldResult;

use crate::errors::{Result, WarshallError};

pub fn quote_csv_cell<W>(mut wtr: W, mut data: &[u8]) -> std::io::Result<()>
where
    W: Write,
{
    let mut output = [0; 4096];
    let mut writer = csv_core::Writer::new();
    loop {
        let (result, nin, nout) = writer.field(data, &mut output);
        wtr.write_all(&output[..nout])?;
        if result == csv_core::WriteResult::InputEmpty {
            break;
        }
        data = &data[nin..];
    }
    let (result, nout) = writer.finish(&mut output);
    debug_assert_eq!(result, csv_core::WriteResult::InputEmpty);
    wtr.write_all(&output[..nout])?;
    Ok(())
}

/// Splits a CSV row into fields, resolving quotes.
pub fn parse_csv_row(row: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = vec![0; row.len().max(1)];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty | ReadFieldResult::End => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::OutputFull => {
                return Err(WarshallError::invalid_format(
                    "csv",
                    format!("A field is too long, {row}"),
                ));
            }
        };
        let field = std::str::from_utf8(&output[..nout]).map_err(|_| {
            WarshallError::invalid_format("csv", format!("A field is not UTF-8, {row}"))
        })?;
        fields.push(field.to_string());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_row() {
        assert_eq!(
            &["Tokyo", "Osaka", "500"],
            parse_csv_row("Tokyo,Osaka,500").unwrap().as_slice()
        );
    }

    #[test]
    fn test_parse_csv_row_with_quote() {
        assert_eq!(
            &["Exit 1,2", "Exit 3", "-4"],
            parse_csv_row("\"Exit 1,2\",Exit 3,-4").unwrap().as_slice()
        );
    }

    #[test]
    fn test_parse_csv_row_single() {
        assert_eq!(&["A"], parse_csv_row("A").unwrap().as_slice());
    }

    #[test]
    fn test_quote_csv_cell() {
        let mut buf = vec![];
        quote_csv_cell(&mut buf, b"Exit 1,2").unwrap();
        assert_eq!(b"\"Exit 1,2\"", buf.as_slice());
    }
}
