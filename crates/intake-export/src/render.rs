use tera::{Context, Tera};

use intake_core::models::payload::{FormData, GroupRecord};
use intake_core::models::schema::{FormSchema, GroupSchema};
use intake_core::models::template::{DocTemplate, Section};

use crate::error::ExportError;

/// Visible blank substituted for a scalar the payload does not supply.
pub const BLANK: &str = "____________________";

/// Interpret a document template against submitted form data.
///
/// Produces the markdown-ish intermediate consumed by the PDF and DOCX
/// writers: `#`/`##`/`###` headings, prose paragraphs, `**bold**` runs, and
/// `|`-delimited table rows. Sections are emitted in template order; values
/// pass through without normalization.
pub fn render_document(
    schema: &FormSchema,
    template: &DocTemplate,
    data: &FormData,
) -> Result<String, ExportError> {
    let context = build_context(schema, data);
    let mut blocks: Vec<String> = Vec::new();

    for section in &template.sections {
        match section {
            Section::Heading { level, text } => {
                let level = (*level).clamp(1, 3) as usize;
                blocks.push(format!("{} {text}", "#".repeat(level)));
            }
            Section::Static { body } => {
                blocks.push(render_body(body, &context)?);
            }
            Section::Conditional { gate, heading, body } => {
                if !data.has_value(gate) {
                    tracing::debug!(gate, "omitting conditional section");
                    continue;
                }
                if let Some(heading) = heading {
                    blocks.push(format!("## {heading}"));
                }
                blocks.push(render_body(body, &context)?);
            }
            Section::Table { group, heading } => {
                let group_schema = schema
                    .group(group)
                    .ok_or_else(|| ExportError::UnknownGroup(group.clone()))?;
                let Some(table) = render_table(group_schema, data.group(group)) else {
                    tracing::debug!(group, "omitting empty table section");
                    continue;
                };
                if let Some(heading) = heading {
                    blocks.push(format!("## {heading}"));
                }
                blocks.push(table);
            }
        }
    }

    Ok(blocks.join("\n\n"))
}

/// Every scalar field of the schema becomes a template variable: the
/// submitted value, or a visible blank when absent or empty.
fn build_context(schema: &FormSchema, data: &FormData) -> Context {
    let mut context = Context::new();
    for field in &schema.fields {
        let value = match data.field(&field.name) {
            Some(v) if !v.trim().is_empty() => v,
            _ => BLANK,
        };
        context.insert(&field.name, value);
    }
    context
}

fn render_body(body: &str, context: &Context) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("section", body)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    let rendered = tera.render("section", context)?;
    Ok(rendered)
}

/// Render a repeatable group as table rows: the fixed header row, then one
/// row per record in payload order. Records whose every cell is empty are
/// skipped; returns `None` when no data rows remain.
fn render_table(group: &GroupSchema, records: &[GroupRecord]) -> Option<String> {
    let rows: Vec<Vec<&str>> = records
        .iter()
        .map(|record| {
            group
                .columns
                .iter()
                .map(|c| record.get(&c.field).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
        })
        .filter(|cells| cells.iter().any(|c| !c.trim().is_empty()))
        .collect();

    if rows.is_empty() {
        return None;
    }

    let mut out = String::new();
    push_row(&mut out, group.columns.iter().map(|c| c.header.as_str()));
    push_row(&mut out, group.columns.iter().map(|_| "---"));
    for cells in rows {
        push_row(&mut out, cells.into_iter());
    }
    // Drop the trailing newline so the block joins cleanly.
    out.pop();
    Some(out)
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}
