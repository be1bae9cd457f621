use cipherforge::optimizer::RestartOutcome;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

pub fn solve_summary(outcome: &RestartOutcome) {
    println!(
        "\nSolved in {:.2} seconds after {}",
        outcome.elapsed.as_secs_f64(),
        plural(outcome.attempts, "attempt")
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Attempts").add_attribute(Attribute::Bold),
        Cell::new("Fitness").fg(Color::Cyan),
        Cell::new("Overlap").fg(Color::Green),
        Cell::new("Seconds"),
    ]);
    table.add_row(vec![
        Cell::new(outcome.attempts),
        Cell::new(format!("{:.2}", outcome.fitness)).fg(Color::Cyan),
        Cell::new(format!("{:.1}%", outcome.overlap * 100.0)).fg(Color::Green),
        Cell::new(format!("{:.2}", outcome.elapsed.as_secs_f64())),
    ]);

    for i in 0..4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

pub fn score(name: &str, symbols: usize, width: usize, fitness: f64) {
    let chunks = symbols / width;
    let per_chunk = if chunks > 0 {
        fitness / chunks as f64
    } else {
        0.0
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Symbols"),
        Cell::new("Width"),
        Cell::new("Fitness").fg(Color::Cyan),
        Cell::new("Per chunk"),
    ]);
    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(symbols),
        Cell::new(width),
        Cell::new(format!("{:.2}", fitness)).fg(Color::Cyan),
        Cell::new(format!("{:.3}", per_chunk)),
    ]);
    println!("\n{}", table);
    println!("Fitness: {:.4}", fitness);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "attempt"), "1 attempt");
        assert_eq!(plural(0, "attempt"), "0 attempts");
        assert_eq!(plural(3, "attempt"), "3 attempts");
    }
}
