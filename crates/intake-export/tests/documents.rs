use intake_core::models::payload::FormData;
use intake_export::docx::generate_docx;
use intake_export::pdf::generate_pdf;
use intake_export::render::render_document;
use intake_export::styles::DocumentStyles;
use intake_forms::get_form;

fn rendered_letter() -> String {
    let form = get_form("letter-medical-necessity-thyroid").unwrap();
    let data: FormData = serde_json::from_value(serde_json::json!({
        "letterDate": "2026-08-27",
        "patientName": "Jane Doe",
        "patientDob": "1990-03-14",
        "diagnosis": "Hashimoto's thyroiditis",
        "requestedService": "continuous glucose monitor",
        "providerName": "Dr. A. Patel",
        "patientConditions": [
            {"condition": "Hypothyroidism", "dxAge": "31"},
        ],
        "medications": [
            {"name": "Levothyroxine", "dosage": "50mcg", "frequency": "daily"},
        ],
    }))
    .unwrap();
    render_document(form.schema(), form.template(), &data).unwrap()
}

#[test]
fn pdf_output_is_a_pdf() {
    let bytes = generate_pdf(&rendered_letter(), "Letter of Medical Necessity").unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn docx_output_is_a_zip_container() {
    let bytes = generate_docx(&rendered_letter(), &DocumentStyles::default()).unwrap();
    // DOCX is a ZIP archive: PK magic.
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn pdf_handles_multi_page_content() {
    let long = (0..400)
        .map(|i| format!("Paragraph {i} of a very long clinical narrative."))
        .collect::<Vec<_>>()
        .join("\n\n");
    let bytes = generate_pdf(&long, "Progress Note").unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
