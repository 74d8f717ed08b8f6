use intake_core::filenames::{document_file_name, sanitize_patient_name};

#[test]
fn sanitize_replaces_every_non_alphanumeric_one_for_one() {
    assert_eq!(sanitize_patient_name("O'Brien, John!"), "O_Brien__John_");
}

#[test]
fn sanitize_keeps_plain_names_untouched() {
    assert_eq!(sanitize_patient_name("JaneDoe2"), "JaneDoe2");
}

#[test]
fn sanitize_preserves_length() {
    let name = "Dr. A-B c/o (ward 9)";
    assert_eq!(sanitize_patient_name(name).len(), name.len());
}

#[test]
fn file_name_embeds_form_type_patient_date_and_time() {
    let at: jiff::Timestamp = "2026-08-27T14:35:22Z".parse().unwrap();
    let name = document_file_name("progress-note", "Jane Doe", at, "pdf");
    assert_eq!(name, "progress-note_Jane_Doe_2026-08-27_14-35-22.pdf");
}
