//! Document file naming.
//!
//! Pure string functions defining how a stored document's name is derived
//! from the submission: form type, sanitized patient name, date, time.

use jiff::Timestamp;

/// Replace every non-alphanumeric character with `_`, one-for-one.
///
/// `"O'Brien, John!"` becomes `"O_Brien__John_"`.
pub fn sanitize_patient_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Derive the stored file name for one exported document:
/// `{formType}_{patient}_{YYYY-MM-DD}_{HH-MM-SS}.{ext}`.
pub fn document_file_name(
    form_type: &str,
    patient_name: &str,
    at: Timestamp,
    ext: &str,
) -> String {
    format!(
        "{form_type}_{patient}_{date}_{time}.{ext}",
        patient = sanitize_patient_name(patient_name),
        date = at.strftime("%Y-%m-%d"),
        time = at.strftime("%H-%M-%S"),
    )
}
