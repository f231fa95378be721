use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gptable::codec::BinaryCodec;
use gptable::optimizer::OptimizationResult;
use gptable::scorer::{EnergyBreakdown, OrderingPolicy};
use gptable::table::GpTable;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_search_summary(result: &OptimizationResult, d: &EnergyBreakdown) {
    let verdict = if result.is_perfect() {
        Cell::new("PERFECT").fg(Color::Green)
    } else {
        Cell::new("IMPERFECT").fg(Color::Yellow)
    };

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Result").add_attribute(Attribute::Bold),
        Cell::new("Initial"),
        Cell::new("Best").fg(Color::Cyan),
        Cell::new("Skips"),
        Cell::new("Non-skips"),
        Cell::new("Size viol."),
        Cell::new("Gens"),
        Cell::new("Accepted"),
        Cell::new("Improved"),
    ]);
    table.add_row(vec![
        verdict,
        Cell::new(format!("{:.2}", result.initial_energy)),
        Cell::new(format!("{:.2}", result.best_energy)).fg(Color::Cyan),
        Cell::new(d.skips),
        Cell::new(d.non_skips),
        Cell::new(d.size_violations),
        Cell::new(result.generations_run),
        Cell::new(result.accepted),
        Cell::new(result.improvements),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    if result.stopped_early {
        println!("\n⚠️  Search stopped before the generation budget was spent.");
    }
    println!("\n{}", table);
}

/// Phenotype histogram with the member genotypes of each bucket.
pub fn print_buckets(title: &str, gp: &GpTable) {
    let codec = BinaryCodec::new(gp.genotype_bits());

    let mut table = new_table();
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Genotypes"),
    ]);

    for (pid, bucket) in gp.buckets().iter().enumerate() {
        let mut ids = bucket.clone();
        ids.sort_unstable();
        let members = ids
            .iter()
            .filter_map(|&id| codec.encode(id).ok())
            .collect::<Vec<_>>()
            .join(" ");

        table.add_row(vec![
            Cell::new(format!("P{}", pid)),
            Cell::new(bucket.len()).set_alignment(CellAlignment::Right),
            Cell::new(members),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_energies(results: &[(OrderingPolicy, EnergyBreakdown)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Policy").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Adjacency"),
        Cell::new("Size"),
        Cell::new("Skips"),
        Cell::new("Non-skips"),
    ]);

    for (policy, d) in results {
        table.add_row(vec![
            Cell::new(policy).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", d.total)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", d.adjacency_energy)),
            Cell::new(format!("{:.2}", d.size_energy)),
            Cell::new(d.skips),
            Cell::new(d.non_skips),
        ]);
    }

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}
