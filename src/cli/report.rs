use hanzi_index::{CharacterIndex, Element};

/// Prints the post-conversion summary: total characters, stroke range,
/// per-element counts.
pub fn print_statistics(index: &CharacterIndex) {
    println!();
    println!("Statistics:");
    println!("  total characters: {}", index.len());
    match index.stroke_bounds() {
        Some((min, max)) => println!("  stroke range: {} - {}", min, max),
        None => println!("  stroke range: n/a"),
    }
    for element in Element::ALL {
        println!(
            "  {}: {} characters",
            element.symbol(),
            index.element_chars(element).len()
        );
    }
}
