use std::path::PathBuf;
use testbank_core::error::TestbankError;
use testbank_core::extraction::pdftotext::PdftotextExtractor;
use testbank_core::parsing::noise::NoisePatterns;

pub fn run(input_file: PathBuf, out: Option<PathBuf>) -> Result<(), TestbankError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let paper = testbank_core::parse_pdf(&pdf_bytes, &extractor, &NoisePatterns::default())?;

    for warning in &paper.warnings {
        eprintln!("  warning: {warning}");
    }

    let json = serde_json::to_string_pretty(&paper.questions)?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} question(s), written to {}",
                paper.questions.len(),
                path.display()
            );
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}
