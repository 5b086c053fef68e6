//! Tenancy-wide sweep output, one aggregate row per compartment

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::collector::CompartmentInstances;

use super::common::{escape_csv, print_json};

#[derive(Serialize)]
struct SweepRow {
    compartment_id: String,
    instance_count: usize,
    instance_names: Vec<String>,
}

/// Render the sweep result set, sorted by compartment id
pub fn output_sweep(results: &[CompartmentInstances], format: OutputFormat) {
    let mut rows: Vec<SweepRow> = results
        .iter()
        .map(|r| SweepRow {
            compartment_id: r.compartment_id.clone(),
            instance_count: r.instance_names.len(),
            instance_names: r.instance_names.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.compartment_id.cmp(&b.compartment_id));

    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => output_csv(&rows),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(rows: &[SweepRow]) {
    println!("Compute Instances by Compartment:");
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Compartment", "Instances", "Names"]);
    for row in rows {
        table.add_row(vec![
            &row.compartment_id,
            &row.instance_count.to_string(),
            &row.instance_names.join(", "),
        ]);
    }
    println!("{table}");
}

fn output_csv(rows: &[SweepRow]) {
    println!("compartment_id,instance_count,instance_names");
    for row in rows {
        println!(
            "{},{},{}",
            escape_csv(&row.compartment_id),
            row.instance_count,
            escape_csv(&row.instance_names.join(";"))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, names: &[&str]) -> CompartmentInstances {
        CompartmentInstances {
            compartment_id: id.to_string(),
            instance_names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_output_sweep_empty() {
        output_sweep(&[], OutputFormat::Table);
    }

    #[test]
    fn test_output_sweep_all_formats() {
        let results = vec![result("c2", &[]), result("c1", &["i1", "i2"])];
        output_sweep(&results, OutputFormat::Table);
        output_sweep(&results, OutputFormat::Csv);
        output_sweep(&results, OutputFormat::Json);
    }

    #[test]
    fn test_rows_sorted_by_compartment() {
        let results = vec![result("c-z", &["x"]), result("c-a", &["y"])];
        // Sorting happens inside output_sweep; mirror it here to pin the rule
        let mut ids: Vec<&str> = results.iter().map(|r| r.compartment_id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["c-a", "c-z"]);
    }
}
