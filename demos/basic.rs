//! Basic example of using the crossword layout engine

use crossword_core::{LayoutConfig, LayoutEngine, NumberingMode, WordRecord};

fn main() {
    let words = vec![
        WordRecord::new("1", "Tierra", "Planeta en el que vivimos").with_category("astronomía"),
        WordRecord::new("2", "Luna", "Satélite natural de la Tierra").with_category("astronomía"),
        WordRecord::new("3", "Sol", "Estrella del sistema solar").with_category("astronomía"),
        WordRecord::new("4", "Marte", "El planeta rojo").with_category("astronomía"),
        WordRecord::new("5", "Cometa", "Astro con cola luminosa").with_category("astronomía"),
    ];

    // Lay out with the defaults (15x15, placement-order numbering)
    println!("Laying out {} words...\n", words.len());
    let layout = crossword_core::place_all(&words);

    println!("{}", layout.grid());
    for clue in &layout.clues {
        println!(
            "{:>2}. {} ({}) at row {}, col {}: {}",
            clue.number, clue.word, clue.position.direction, clue.position.row, clue.position.col, clue.record.clue
        );
    }

    println!("\nConnected: {}", layout.connected);
    println!("Complete: {}", layout.complete);
    for diagnostic in &layout.diagnostics {
        println!("  note: {}", diagnostic);
    }

    // Same words on a compact grid with conventional numbering
    println!("\n--- Compact grid, reading-order numbering ---\n");
    let config = LayoutConfig::compact().with_numbering(NumberingMode::ReadingOrder);
    match LayoutEngine::new(config) {
        Ok(engine) => {
            let compact = engine.place_all(&words);
            println!("{}", compact.grid());
            println!("Across:");
            for clue in compact.across() {
                println!("  {}. {}", clue.number, clue.record.clue);
            }
            println!("Down:");
            for clue in compact.down() {
                println!("  {}. {}", clue.number, clue.record.clue);
            }
        }
        Err(e) => println!("Invalid configuration: {}", e),
    }
}
