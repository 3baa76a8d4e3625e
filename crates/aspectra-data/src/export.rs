//! Export of IOB-encoded rows for downstream training code.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;

use aspectra_core::{PipelineOutput, RecordId};

use crate::error::Result;

#[derive(Serialize)]
struct TsvRow<'a> {
    sentence_id: RecordId,
    words: &'a str,
    labels: String,
}

/// One JSONL line: a record with its tokens and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedSentence {
    pub sentence_id: RecordId,
    pub tokens: Vec<String>,
    pub ner_tags: Vec<String>,
}

/// Collect contiguous rows of each record into sentences.
pub fn sentences(output: &PipelineOutput) -> Vec<TaggedSentence> {
    let mut sentences: Vec<TaggedSentence> = Vec::new();

    for (row, tag) in output.iter() {
        match sentences.last_mut() {
            Some(current) if current.sentence_id == row.record_id => {
                current.tokens.push(row.aspect_value.clone());
                current.ner_tags.push(tag.to_string());
            }
            _ => sentences.push(TaggedSentence {
                sentence_id: row.record_id,
                tokens: vec![row.aspect_value.clone()],
                ner_tags: vec![tag.to_string()],
            }),
        }
    }

    sentences
}

/// Write a tab-separated table with `sentence_id`, `words` and `labels` columns.
///
/// Cells are never quoted, matching how tables are read back.
pub fn write_tsv<W: Write>(writer: W, output: &PipelineOutput) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    for (row, tag) in output.iter() {
        writer.serialize(TsvRow {
            sentence_id: row.record_id,
            words: &row.aspect_value,
            labels: tag.to_string(),
        })?;
    }
    writer.flush()?;

    Ok(())
}

/// Write one JSON object per record.
pub fn write_jsonl<W: Write>(mut writer: W, output: &PipelineOutput) -> Result<()> {
    for sentence in sentences(output) {
        serde_json::to_writer(&mut writer, &sentence)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    Ok(())
}
