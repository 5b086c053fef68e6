//! Search-flow output, instances grouped by owning compartment

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::collector::InstanceDetail;

use super::common::{escape_csv, print_json};

/// Render the search result set grouped and sorted by compartment name
pub fn output_search(results: &[InstanceDetail], format: OutputFormat) {
    let mut rows: Vec<InstanceDetail> = results.to_vec();
    rows.sort_by(|a, b| {
        a.compartment
            .cmp(&b.compartment)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => output_csv(&rows),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(rows: &[InstanceDetail]) {
    println!("Running Compute Instances by Compartment:");
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Compartment", "Instance", "Shape"]);
    for row in rows {
        table.add_row(vec![&row.compartment, &row.display_name, &row.shape]);
    }
    println!("{table}");
}

fn output_csv(rows: &[InstanceDetail]) {
    println!("compartment,instance,shape");
    for row in rows {
        println!(
            "{},{},{}",
            escape_csv(&row.compartment),
            escape_csv(&row.display_name),
            escape_csv(&row.shape)
        );
    }
}
