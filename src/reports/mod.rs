use carseq::api::EvaluationReport;
use carseq::candidates::RankedCandidate;
use carseq::objective::{ObjectiveKind, ObjectiveOrder};
use carseq::validator::Feasibility;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn kind_label(kind: ObjectiveKind) -> &'static str {
    match kind {
        ObjectiveKind::ColorChanges => "Color changes",
        ObjectiveKind::HighPriority => "High violations",
        ObjectiveKind::LowPriority => "Low violations",
    }
}

fn feasibility_cell(feasibility: &Feasibility) -> Cell {
    match feasibility {
        Feasibility::Feasible => Cell::new("yes").fg(Color::Green),
        Feasibility::Infeasible { position, .. } => {
            Cell::new(format!("no (pos {})", position)).fg(Color::Red)
        }
    }
}

pub fn print_evaluation(report: &EvaluationReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Objective").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let order = report.objective_order;
    for (rank, &kind) in order.kinds().iter().enumerate() {
        let ranked = rank < order.levels();
        let label = if ranked {
            (rank + 1).to_string()
        } else {
            "-".to_string()
        };
        let mut value = Cell::new(report.objective.get(kind));
        if rank == 0 {
            value = value.fg(Color::Cyan);
        }
        table.add_row(vec![Cell::new(label), Cell::new(kind_label(kind)), value]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Scalar").add_attribute(Attribute::Bold),
        Cell::new(report.scalar).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Feasible"),
        feasibility_cell(&report.feasibility),
    ]);

    match order.code() {
        Some(code) => println!("\nObjective order: {} (code {})", order, code),
        None => println!("\nObjective order: {}", order),
    }
    println!("{}", table);
}

pub fn print_feasibility(feasibility: &Feasibility, max_paint_batch: usize) {
    match feasibility {
        Feasibility::Feasible => println!("FEASIBLE (paint batch limit {})", max_paint_batch),
        Feasibility::Infeasible { reason, position } => println!(
            "INFEASIBLE: {} at position {} (limit {})",
            reason, position, max_paint_batch
        ),
    }
}

pub fn print_ranking(ranked: &[RankedCandidate], order: ObjectiveOrder) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("#").add_attribute(Attribute::Bold)];
    header.extend(
        order
            .priority()
            .iter()
            .map(|&kind| Cell::new(kind_label(kind)).add_attribute(Attribute::Bold)),
    );
    header.push(Cell::new("Feasible").add_attribute(Attribute::Bold));
    header.push(Cell::new("Head of sequence"));
    table.set_header(header);

    for i in 1..=order.levels() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, candidate) in ranked.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1)];
        row.extend(
            order
                .priority()
                .iter()
                .map(|&kind| Cell::new(candidate.objective.get(kind))),
        );
        row.push(feasibility_cell(&candidate.feasibility));
        row.push(Cell::new(preview(&candidate.sequence, 12)));
        table.add_row(row);
    }
    println!("\n{}", table);
}

fn preview(sequence: &[usize], len: usize) -> String {
    let head: Vec<String> = sequence.iter().take(len).map(|i| i.to_string()).collect();
    if sequence.len() > len {
        format!("{} ...", head.join(" "))
    } else {
        head.join(" ")
    }
}
