use cipherforge::cipher::SubstitutionCipher;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Cipher symbols on one row, their plaintext right below.
pub fn print_key(cipher: &SubstitutionCipher) {
    println!("\nKey:");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 13;

    for chunk in cipher.mapping().chunks(cols) {
        let from: Vec<Cell> = chunk
            .iter()
            .map(|(c, _)| {
                Cell::new(c)
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        let to: Vec<Cell> = chunk
            .iter()
            .map(|(_, p)| Cell::new(p).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(from);
        table.add_row(to);
    }
    println!("{}", table);
}
