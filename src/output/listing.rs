//! Single-compartment listing output

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::api::Instance;
use crate::cli::OutputFormat;

use super::common::{escape_csv, print_json};

/// Serializable instance row for structured output
#[derive(Serialize)]
struct ListingRow {
    name: String,
    status: String,
}

/// Render one compartment's (name, status) listing
pub fn output_listing(compartment_id: &str, instances: &[Instance], format: OutputFormat) {
    let mut rows: Vec<ListingRow> = instances
        .iter()
        .map(|i| ListingRow {
            name: i.display_name.clone(),
            status: i.running_status().to_string(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    match format {
        OutputFormat::Table => output_table(compartment_id, &rows),
        OutputFormat::Csv => output_csv(&rows),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(compartment_id: &str, rows: &[ListingRow]) {
    if rows.is_empty() {
        println!("No instances found in compartment {}", compartment_id);
        return;
    }

    println!("Instances in compartment {}:", compartment_id);
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec!["Name", "Status"]);
    for row in rows {
        table.add_row(vec![&row.name, &row.status]);
    }
    println!("{table}");
}

fn output_csv(rows: &[ListingRow]) {
    println!("name,status");
    for row in rows {
        println!("{},{}", escape_csv(&row.name), escape_csv(&row.status));
    }
}
