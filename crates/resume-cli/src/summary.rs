//! Section summary table for a resume document.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use resume_model::ResumeDocument;

/// Print a per-section overview: entry counts and bullet totals for the
/// repeated sections, then the flat skill and language counts.
pub fn print_document_summary(doc: &ResumeDocument) {
    println!("Resume: {}", doc.personal_info.name);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Entries"),
        header_cell("Bullets"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Experience"),
        Cell::new(doc.experience.len()),
        Cell::new(bullet_total(doc.experience.iter().map(|e| &e.bullets))),
    ]);
    table.add_row(vec![
        Cell::new("Projects"),
        Cell::new(doc.projects.len()),
        Cell::new(bullet_total(doc.projects.iter().map(|p| &p.bullets))),
    ]);
    table.add_row(vec![
        Cell::new("Education"),
        Cell::new(doc.education.len()),
        Cell::new(bullet_total(doc.education.iter().map(|e| &e.bullets))),
    ]);
    table.add_row(vec![
        Cell::new("Skills"),
        Cell::new(doc.skills.len()),
        Cell::new("-"),
    ]);
    table.add_row(vec![
        Cell::new("Languages"),
        Cell::new(doc.languages.len()),
        Cell::new("-"),
    ]);

    println!("{table}");
}

fn bullet_total<'a>(bullets: impl Iterator<Item = &'a Vec<String>>) -> usize {
    bullets.map(Vec::len).sum()
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
