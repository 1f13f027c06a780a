//! Batch screening over JSON streams: an array of `ScreeningInput` in, a
//! ranked array of `ScreeningSummary` out.

use std::collections::HashSet;
use std::io::{Read, Write};

use tracing::info;

use crate::errors::AppError;
use crate::matching::summary::{screen_batch, ScreeningConfig};
use crate::models::screening::ScreeningInput;

pub fn parse_inputs(raw: &str) -> Result<Vec<ScreeningInput>, AppError> {
    let inputs: Vec<ScreeningInput> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for input in &inputs {
        if !seen.insert(input.candidate_id) {
            return Err(AppError::Validation(format!(
                "duplicate candidateId {}",
                input.candidate_id
            )));
        }
    }

    Ok(inputs)
}

/// Reads the whole batch from `reader`, writes pretty JSON to `writer`.
/// Returns the number of candidates screened.
pub fn run_batch<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &ScreeningConfig,
) -> Result<usize, AppError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    let inputs = parse_inputs(&raw)?;
    info!("Read {} screening inputs", inputs.len());

    let summaries = screen_batch(&inputs, config);
    serde_json::to_writer_pretty(&mut writer, &summaries)
        .map_err(|e| AppError::Internal(e.into()))?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(summaries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::io::Cursor;
    use uuid::Uuid;

    fn run(input: &Value) -> Result<Value, AppError> {
        let mut out = Vec::new();
        run_batch(
            Cursor::new(input.to_string()),
            &mut out,
            &ScreeningConfig::default(),
        )?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_run_batch_ranks_and_classifies() {
        let input = json!([
            {
                "candidateId": Uuid::new_v4(),
                "name": "Low",
                "requiredSkills": ["Rust"],
                "candidateSkills": [],
                "matchScore": 0.3,
                "source": "MANUAL"
            },
            {
                "candidateId": Uuid::new_v4(),
                "name": "High",
                "requiredSkills": ["Python", "SQL"],
                "candidateSkills": ["python", "Go"],
                "matchScore": 88,
                "claimedYears": 5,
                "actualYears": 3,
                "source": "FILE_UPLOAD"
            }
        ]);

        let out = run(&input).unwrap();
        let rows = out.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "High");
        assert_eq!(rows[0]["match"]["tier"], "high");
        assert_eq!(rows[0]["skillGap"]["missing"], json!(["sql"]));
        assert_eq!(rows[0]["experience"]["flagged"], true);
        assert_eq!(rows[0]["source"]["displayClass"], "warning");
        assert_eq!(rows[1]["match"]["percent"], 30);
        assert_eq!(rows[1]["match"]["tier"], "low");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(run(&json!([])).unwrap(), json!([]));
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let mut out = Vec::new();
        let err = run_batch(
            Cursor::new("{not json"),
            &mut out,
            &ScreeningConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let input = json!([{
            "candidateId": Uuid::new_v4(),
            "name": "Ada",
            "matchScore": "eighty"
        }]);
        assert!(matches!(run(&input), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_candidate_ids_rejected() {
        let id = Uuid::new_v4();
        let input = json!([
            { "candidateId": id, "name": "A", "matchScore": 0.5 },
            { "candidateId": id, "name": "B", "matchScore": 0.6 }
        ]);
        let err = run(&input).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains(&id.to_string()));
    }
}
