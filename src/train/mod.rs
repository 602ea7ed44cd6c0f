//! Offline training
//!
//! Reads labeled CSV corpora, accumulates trigram counts per language and
//! produces a normalized [`TrainedModel`]. Single-threaded: the trainer
//! owns all of its state until it returns.

mod corpus;
mod trainer;

pub use corpus::{CorpusReader, CorpusRecords, DEFAULT_MAX_FIELD_LEN};
pub use trainer::Trainer;

use crate::error::LangIdResult;
use crate::model::TrainedModel;
use std::path::{Path, PathBuf};
use tracing::info;

/// One labeled row of training data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    /// Language label as written in the corpus (canonicalized later)
    pub label: String,
    /// One or more texts in that language
    pub texts: Vec<String>,
}

/// Summary of a training run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainReport {
    /// Files read, in order
    pub files: Vec<PathBuf>,
    /// Records accumulated across all files
    pub records: usize,
    /// Distinct languages in the model
    pub languages: usize,
    /// Trigram dimensions summed over all languages
    pub dimensions: usize,
}

/// Train on in-memory records.
pub fn train<'a, I>(records: I) -> LangIdResult<TrainedModel>
where
    I: IntoIterator<Item = &'a TrainingRecord>,
{
    let mut trainer = Trainer::new();
    for record in records {
        trainer.add_record(record)?;
    }
    trainer.finish()
}

/// Train on one or more CSV files with a shared accumulator, so a label
/// spread across files ends up as a single vector.
pub fn train_from_files(
    paths: &[PathBuf],
    reader: &CorpusReader,
) -> LangIdResult<(TrainedModel, TrainReport)> {
    let mut trainer = Trainer::new();

    for path in paths {
        let before = trainer.record_count();
        feed_file(&mut trainer, path, reader)?;
        info!(
            "Read {} records from {}",
            trainer.record_count() - before,
            path.display()
        );
    }

    let records = trainer.record_count();
    let model = trainer.finish()?;
    let report = TrainReport {
        files: paths.to_vec(),
        records,
        languages: model.language_count(),
        dimensions: model.dimension_count(),
    };
    info!(
        "Trained {} languages ({} trigram dimensions) from {} records",
        report.languages, report.dimensions, report.records
    );

    Ok((model, report))
}

fn feed_file(trainer: &mut Trainer, path: &Path, reader: &CorpusReader) -> LangIdResult<()> {
    for record in reader.open(path)? {
        trainer.add_record(&record?)?;
    }
    Ok(())
}
