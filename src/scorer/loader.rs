use crate::error::{CfResult, CipherForgeError};
use crate::scorer::LanguageModel;
use fnv::FnvHashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

const META_TAG: &str = "#";

/// Writes the trained entries of `model` as TSV.
///
/// The first record is `#\t<width>\t<total>`, followed by one
/// `<ngram>\t<log2 probability>` record per n-gram, sorted by n-gram.
pub fn write_model<W: Write>(model: &LanguageModel, writer: W) -> CfResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record([
        META_TAG.to_string(),
        model.width().to_string(),
        model.total().to_string(),
    ])?;

    let mut entries: Vec<(&str, f64)> = model.trained().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (gram, p) in entries {
        wtr.write_record([gram.to_string(), p.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn read_model<R: Read>(reader: R) -> CfResult<LanguageModel> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();

    let meta = records
        .next()
        .ok_or_else(|| CipherForgeError::Validation("model file is empty".to_string()))??;
    if meta.len() != 3 || &meta[0] != META_TAG {
        return Err(CipherForgeError::Validation(
            "model file is missing its '#\\t<width>\\t<total>' header".to_string(),
        ));
    }
    let width: usize = parse_field(&meta[1], "width")?;
    let total: u64 = parse_field(&meta[2], "total")?;

    let mut log_probs = FnvHashMap::default();
    for (row, result) in records.enumerate() {
        let rec = result?;
        if rec.len() != 2 {
            return Err(CipherForgeError::Validation(format!(
                "row {}: expected 2 fields, found {}",
                row + 2,
                rec.len()
            )));
        }
        let p: f64 = parse_field(&rec[1], "log probability")?;
        if !p.is_finite() || p > 0.0 {
            return Err(CipherForgeError::Validation(format!(
                "row {}: log probability {} is out of range",
                row + 2,
                p
            )));
        }
        log_probs.insert(rec[0].to_string(), p);
    }

    debug!(width, total, distinct = log_probs.len(), "read language model");
    LanguageModel::from_parts(width, total, log_probs)
}

pub fn save_to_file<P: AsRef<Path>>(model: &LanguageModel, path: P) -> CfResult<()> {
    let file = File::create(path)?;
    write_model(model, file)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<LanguageModel> {
    let file = File::open(path)?;
    read_model(file)
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> CfResult<T> {
    raw.trim().parse().map_err(|_| {
        CipherForgeError::Validation(format!("invalid {} field: '{}'", name, raw))
    })
}
