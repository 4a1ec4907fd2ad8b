//! Terminal table rendering for dataset listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement};

use dispatch_model::Dataset;
use dispatch_store::Table;

/// Print a dataset listing with a leading row-index column. The printed
/// indices are the ones `update`/`remove` subcommands accept.
pub fn print_table(table: &Table) {
    let mut out = comfy_table::Table::new();
    let mut header = vec![header_cell("Row")];
    header.extend(table.columns.iter().map(|column| header_cell(column)));
    out.set_header(header);
    apply_table_style(&mut out);
    for (index, row) in table.rows.iter().enumerate() {
        let mut cells = vec![Cell::new(index)];
        cells.extend(row.iter().map(Cell::new));
        out.add_row(cells);
    }
    println!("{out}");
    println!("{} row(s)", table.len());
}

/// Print the dataset registry: name, backing file, columns.
pub fn print_datasets() {
    let mut out = comfy_table::Table::new();
    out.set_header(vec![
        header_cell("Dataset"),
        header_cell("File"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut out);
    for dataset in Dataset::ALL {
        out.add_row(vec![
            Cell::new(dataset.as_str()),
            Cell::new(dataset.file_name()),
            Cell::new(dataset.columns().join(", ")),
        ]);
    }
    println!("{out}");
}

pub fn apply_table_style(table: &mut comfy_table::Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
