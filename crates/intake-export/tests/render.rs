use intake_core::models::payload::FormData;
use intake_export::render::{render_document, BLANK};
use intake_forms::{get_form, FormDefinition};

fn thyroid_form() -> Box<dyn FormDefinition> {
    get_form("letter-medical-necessity-thyroid").unwrap()
}

fn data(json: serde_json::Value) -> FormData {
    serde_json::from_value(json).unwrap()
}

fn render(form: &dyn FormDefinition, data: &FormData) -> String {
    render_document(form.schema(), form.template(), data).unwrap()
}

#[test]
fn condition_table_has_fixed_header_and_one_data_row() {
    let form = thyroid_form();
    let data = data(serde_json::json!({
        "patientName": "Jane Doe",
        "patientConditions": [
            {"condition": "Type 1 Diabetes", "dxAge": "12"},
        ],
    }));

    let rendered = render(form.as_ref(), &data);
    assert!(rendered.contains("| Thyroid Conditions | Dx Age |"));
    assert!(rendered.contains("| Type 1 Diabetes | 12 |"));
    // Exactly one data row.
    assert_eq!(rendered.matches("| Type 1 Diabetes | 12 |").count(), 1);
}

#[test]
fn empty_group_omits_the_whole_section_including_heading() {
    let form = thyroid_form();
    let data = data(serde_json::json!({
        "patientName": "Jane Doe",
        "familyHistory": [],
    }));

    let rendered = render(form.as_ref(), &data);
    assert!(!rendered.contains("Family History"));
    assert!(!rendered.contains("| Relative |"));
}

#[test]
fn records_with_every_cell_empty_are_skipped() {
    let form = thyroid_form();
    let data = data(serde_json::json!({
        "patientConditions": [
            {"condition": "", "dxAge": ""},
            {"condition": "Graves' disease", "dxAge": "40"},
            {"condition": " ", "dxAge": ""},
        ],
    }));

    let rendered = render(form.as_ref(), &data);
    assert!(rendered.contains("| Graves' disease | 40 |"));
    // Header + separator + one data row.
    let table_lines = rendered
        .lines()
        .filter(|l| l.starts_with('|'))
        .count();
    assert_eq!(table_lines, 3);
}

#[test]
fn row_order_is_preserved_verbatim() {
    let form = thyroid_form();
    let data = data(serde_json::json!({
        "patientConditions": [
            {"condition": "Hypothyroidism", "dxAge": "31"},
            {"condition": "Goiter", "dxAge": "35"},
        ],
    }));

    let rendered = render(form.as_ref(), &data);
    let first = rendered.find("Hypothyroidism").unwrap();
    let second = rendered.find("Goiter").unwrap();
    assert!(first < second);
}

#[test]
fn conditional_section_included_only_when_gate_is_non_empty() {
    let form = thyroid_form();

    let without = render(form.as_ref(), &data(serde_json::json!({})));
    assert!(!without.contains("Clinical Justification"));

    let with = render(
        form.as_ref(),
        &data(serde_json::json!({
            "clinicalJustification": "Prior therapy failed after 6 months.",
        })),
    );
    assert!(with.contains("## Clinical Justification"));
    assert!(with.contains("Prior therapy failed after 6 months."));
}

#[test]
fn missing_scalar_renders_a_visible_blank() {
    let form = thyroid_form();
    let rendered = render(form.as_ref(), &data(serde_json::json!({})));
    assert!(rendered.contains(&format!("on behalf of my patient, **{BLANK}**")));
}

#[test]
fn submitted_values_pass_through_unnormalized() {
    let form = thyroid_form();
    // Locale-formatted date stays as provided.
    let rendered = render(
        form.as_ref(),
        &data(serde_json::json!({"letterDate": "8/27/2026"})),
    );
    assert!(rendered.contains("Date: 8/27/2026"));
}

#[test]
fn sections_render_in_template_order() {
    let form = thyroid_form();
    let rendered = render(
        form.as_ref(),
        &data(serde_json::json!({
            "patientConditions": [{"condition": "Hypothyroidism", "dxAge": "31"}],
            "medications": [{"name": "Levothyroxine", "dosage": "50mcg", "frequency": "daily"}],
        })),
    );

    let history = rendered.find("Patient Thyroid History").unwrap();
    let meds = rendered.find("Current Medications").unwrap();
    let closing = rendered.find("Sincerely,").unwrap();
    assert!(history < meds && meds < closing);
}
