//! One record per line, fields comma-separated, no escaping, no header:
//!
//! ```text
//! <Type>,<Id>,<Location>,<Description>,<Priority>,<Status>,<variant fields...>
//! ```
//!
//! The format has no defence against commas embedded in free-text fields; a
//! field containing a comma corrupts the record on the next load. The format
//! is preserved as-is for compatibility with existing data files.

use std::io::{self, BufRead, Write};

use crate::{Emergency, Kind};

/// Serialize a record to its single-line on-disk form.
///
/// The common fields come first, then the variant fields in their fixed
/// order. Booleans serialize as `1`/`0`.
#[must_use]
pub fn to_line(emergency: &Emergency) -> String {
    let common = format!(
        "{},{},{},{},{},{}",
        emergency.kind().tag(),
        emergency.id(),
        emergency.location(),
        emergency.description(),
        emergency.priority(),
        emergency.status()
    );

    match emergency.kind() {
        Kind::Medical {
            patient_name,
            condition,
            is_urgent,
        } => format!("{common},{patient_name},{condition},{}", flag(*is_urgent)),
        Kind::Fire {
            building_type,
            severity,
            hazardous_materials,
        } => format!(
            "{common},{building_type},{severity},{}",
            flag(*hazardous_materials)
        ),
        Kind::Police {
            crime_type,
            suspect_armed,
            officers_needed,
        } => format!(
            "{common},{crime_type},{},{officers_needed}",
            flag(*suspect_armed)
        ),
    }
}

/// Parse one line of the persisted file.
///
/// Fields are consumed by sequential prefix splitting: everything up to the
/// next comma is one field, and the last field of a variant takes the
/// remainder of the line.
///
/// Returns `Ok(None)` for a line whose type tag is unrecognised; such lines
/// are skipped without a report, for compatibility with files written by
/// other tooling.
///
/// The persisted id is consumed and discarded: the reconstructed record
/// derives a fresh identifier from its load-time creation timestamp. The
/// persisted status is applied verbatim.
///
/// # Errors
///
/// Returns an error if the line ends before a required field or if a numeric
/// field does not parse as an integer.
pub fn parse_line(line: &str) -> Result<Option<Emergency>, ParseLineError> {
    let mut fields = Fields::new(line);

    let tag = fields.next("type")?;
    let _id = fields.next("id")?;
    let location = fields.next("location")?;
    let description = fields.next("description")?;
    let priority = parse_int("priority", fields.next("priority")?)?;
    let status = fields.next("status")?;

    let kind = match tag {
        "Medical" => Kind::Medical {
            patient_name: fields.next("patient name")?.to_string(),
            condition: fields.next("condition")?.to_string(),
            is_urgent: flag_set(fields.remainder("urgent flag")?),
        },
        "Fire" => Kind::Fire {
            building_type: fields.next("building type")?.to_string(),
            severity: parse_int("severity", fields.next("severity")?)?,
            hazardous_materials: flag_set(fields.remainder("hazmat flag")?),
        },
        "Police" => Kind::Police {
            crime_type: fields.next("crime type")?.to_string(),
            suspect_armed: flag_set(fields.next("armed flag")?),
            officers_needed: parse_int("officers needed", fields.remainder("officers needed")?)?,
        },
        _ => return Ok(None),
    };

    let mut emergency = Emergency::new(
        location.to_string(),
        description.to_string(),
        priority,
        kind,
    );
    emergency.update_status(status.to_string());
    Ok(Some(emergency))
}

/// Read records from the persisted file, up to `capacity`.
///
/// Lines with unrecognised type tags are skipped silently. Lines that fail
/// to parse are logged at warn level and skipped; a malformed record never
/// aborts the load.
///
/// # Errors
///
/// Returns an error only if reading from the underlying stream fails.
pub fn read_records<R: BufRead>(reader: R, capacity: usize) -> io::Result<Vec<Emergency>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        if records.len() >= capacity {
            break;
        }
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(Some(emergency)) => records.push(emergency),
            Ok(None) => {}
            Err(error) => tracing::warn!("skipping malformed record: {error}"),
        }
    }

    Ok(records)
}

/// Write records to the persisted file, one line per record, in order.
///
/// # Errors
///
/// Returns an error if writing to the underlying stream fails.
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Emergency>,
{
    for record in records {
        writeln!(writer, "{}", to_line(record))?;
    }
    Ok(())
}

/// Errors that can occur when parsing a record line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseLineError {
    /// The line ended before the named field.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// A numeric field did not contain an integer.
    #[error("invalid integer in field '{field}': '{value}'")]
    InvalidInt {
        /// The name of the offending field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },
}

/// A cursor over the comma-separated fields of one line.
struct Fields<'a> {
    rest: Option<&'a str>,
}

impl<'a> Fields<'a> {
    const fn new(line: &'a str) -> Self {
        Self { rest: Some(line) }
    }

    /// The next field, up to (not including) the next comma. A field with no
    /// trailing comma consumes the rest of the line.
    fn next(&mut self, field: &'static str) -> Result<&'a str, ParseLineError> {
        let rest = self
            .rest
            .take()
            .ok_or(ParseLineError::MissingField(field))?;
        match rest.find(',') {
            Some(pos) => {
                self.rest = Some(&rest[pos + 1..]);
                Ok(&rest[..pos])
            }
            None => Ok(rest),
        }
    }

    /// The remainder of the line, commas included.
    fn remainder(&mut self, field: &'static str) -> Result<&'a str, ParseLineError> {
        self.rest.take().ok_or(ParseLineError::MissingField(field))
    }
}

const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// `"1"` is set; anything else is clear.
fn flag_set(value: &str) -> bool {
    value == "1"
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ParseLineError> {
    value.parse().map_err(|_| ParseLineError::InvalidInt {
        field,
        value: value.to_string(),
    })
}
