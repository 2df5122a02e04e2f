use crate::manifest;
use std::fs;
use std::path::PathBuf;
use testbank_core::error::TestbankError;
use testbank_core::extraction::pdftotext::PdftotextExtractor;
use testbank_core::parsing::noise::NoisePatterns;

/// Batch mode: turn every PDF in `uploads` into a JSON test file in
/// `tests`, keep the manifest current, and delete consumed PDFs unless
/// `keep` is set. One bad PDF never stops the batch.
pub fn run(uploads: PathBuf, tests: PathBuf, keep: bool) -> Result<(), TestbankError> {
    if !uploads.exists() {
        fs::create_dir_all(&uploads)?;
        eprintln!(
            "Created empty uploads directory {}; drop PDFs there and rerun.",
            uploads.display()
        );
        return Ok(());
    }
    fs::create_dir_all(&tests)?;

    let extractor = PdftotextExtractor::new();
    let patterns = NoisePatterns::default();
    let manifest_path = tests.join("test_manifest.json");

    let mut pdfs: Vec<PathBuf> = fs::read_dir(&uploads)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    pdfs.sort();

    let mut processed = 0usize;
    for pdf_path in &pdfs {
        println!("Processing {}...", pdf_path.display());

        let pdf_bytes = match fs::read(pdf_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("  error reading {}: {e}", pdf_path.display());
                continue;
            }
        };
        let paper = match testbank_core::parse_pdf(&pdf_bytes, &extractor, &patterns) {
            Ok(paper) => paper,
            Err(e) => {
                eprintln!("  error parsing {}: {e}", pdf_path.display());
                continue;
            }
        };
        for warning in &paper.warnings {
            eprintln!("  warning: {warning}");
        }
        if paper.questions.is_empty() {
            eprintln!("  no questions parsed from {}", pdf_path.display());
            continue;
        }

        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
        let out_name = format!("{stem}.json");
        let out_path = tests.join(&out_name);
        let json = serde_json::to_string_pretty(&paper.questions)?;
        if let Err(e) = fs::write(&out_path, json) {
            eprintln!("  error writing {}: {e}", out_path.display());
            continue;
        }

        let display_name = stem.replace(['-', '_'], " ");
        if let Err(e) = manifest::update(&manifest_path, &out_name, &display_name) {
            eprintln!("  warning: {e}");
        }

        println!(
            "  wrote {} ({} questions)",
            out_path.display(),
            paper.questions.len()
        );

        if !keep {
            if let Err(e) = fs::remove_file(pdf_path) {
                eprintln!("  warning: could not remove {}: {e}", pdf_path.display());
            }
        }
        processed += 1;
    }

    if processed == 0 {
        println!("No PDF files found in {}.", uploads.display());
    }

    Ok(())
}
