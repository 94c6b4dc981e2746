use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use elbonian_core::Numeral;
use serde::Serialize;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One output line of a batch run. Successful conversions carry both
/// representations; failures carry the error message instead.
#[derive(Serialize)]
struct BatchRecord<'a> {
    line: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    arabic: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elbonian: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Convert each non-blank line of `input` and append one JSONL record per
/// line to `output`. Returns (converted, failed) counts.
pub fn run_batch(input: &Path, output: &Path) -> Result<(usize, usize), BatchError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let mut converted = 0;
    let mut failed = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record = match Numeral::parse(trimmed) {
            Ok(numeral) => {
                converted += 1;
                BatchRecord {
                    line: idx + 1,
                    input: trimmed,
                    arabic: Some(numeral.to_arabic()),
                    elbonian: Some(numeral.to_elbonian().to_string()),
                    error: None,
                }
            }
            Err(e) => {
                failed += 1;
                BatchRecord {
                    line: idx + 1,
                    input: trimmed,
                    arabic: None,
                    elbonian: None,
                    error: Some(e.to_string()),
                }
            }
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok((converted, failed))
}

pub fn batch_cmd(input_file: &str, output_file: &str) {
    let (converted, failed) = die!(
        run_batch(Path::new(input_file), Path::new(output_file)),
        "Error running batch: {}"
    );
    println!("{converted} converted, {failed} failed");
}
