mod report;

use hanzi_index::{ConverterConfig, parse_file};

/// Runs the conversion end to end: load configuration, parse the source
/// listing, write the JSON document, report.
///
/// There is no flag surface; file locations come from `converter.toml`
/// (built-in defaults plus user/local overrides).
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConverterConfig::load_with_overrides()?;
    let input_path = config.input_path();
    let output_path = config.output_path();

    let output = parse_file(&input_path)?;
    output.index.write_json_file(&output_path)?;

    // Audit trail: one line per matched element listing, for eyeballing the
    // source text against what was recorded.
    for listing in &output.listings {
        println!("✓ line {}: element 「{}」", listing.line, listing.symbol);
        println!("  characters: {}", listing.run);
    }

    println!("Conversion complete, written to {}", output_path.display());
    report::print_statistics(&output.index);

    Ok(())
}
