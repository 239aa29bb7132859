use anyhow::{Context, Result, bail};
use entity::{EmployeeDraft, Field};
use serde::Serialize;
use serde_json::Value;
use tracing::{instrument, warn};

use crate::config::ReportFormat;

/// Accepts a single employee object or an array of them.
pub fn parse_records(raw: &str) -> Result<Vec<EmployeeDraft>> {
    let value: Value = serde_json::from_str(raw).context("input is not valid JSON")?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("record {index} is not an employee object"))
            })
            .collect(),
        object @ Value::Object(_) => {
            let draft = serde_json::from_value(object).context("not an employee object")?;
            Ok(vec![draft])
        }
        other => bail!("expected an employee object or an array of them, found {other}"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    pub index: usize,
    pub employee_id: Option<i32>,
    pub valid: bool,
    pub missing: Option<Field>,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcomes: &'a [RecordOutcome],
    skipped: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    outcomes: Vec<RecordOutcome>,
    total: usize,
}

impl Report {
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    pub fn checked(&self) -> usize {
        self.outcomes.len()
    }

    pub fn invalid(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.valid).count()
    }

    /// Records left unchecked after a fail-fast stop.
    pub fn skipped(&self) -> usize {
        self.total - self.checked()
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => {
                let body = JsonReport {
                    outcomes: &self.outcomes,
                    skipped: self.skipped(),
                };
                serde_json::to_string_pretty(&body).context("failed to encode report")
            }
            ReportFormat::Text => {
                let mut lines: Vec<String> = self.outcomes.iter().map(text_line).collect();
                if self.skipped() > 0 {
                    lines.push(format!("{} record(s) not checked", self.skipped()));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

fn text_line(outcome: &RecordOutcome) -> String {
    let id = outcome
        .employee_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".into());
    match &outcome.message {
        Some(message) => format!("#{} EmployeeId={} invalid: {}", outcome.index, id, message),
        None => format!("#{} EmployeeId={} valid", outcome.index, id),
    }
}

#[instrument(name = "employees.check", skip_all, fields(records = drafts.len(), fail_fast = fail_fast))]
pub fn check_records(drafts: &[EmployeeDraft], fail_fast: bool) -> Report {
    let mut outcomes = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.iter().enumerate() {
        let outcome = match draft.validate() {
            Ok(()) => RecordOutcome {
                index,
                employee_id: draft.employee_id,
                valid: true,
                missing: None,
                message: None,
            },
            Err(err) => {
                warn!(index, employee_id = ?draft.employee_id, field = %err.field(), "invalid employee record");
                RecordOutcome {
                    index,
                    employee_id: draft.employee_id,
                    valid: false,
                    missing: Some(err.field()),
                    message: Some(err.to_string()),
                }
            }
        };
        let stop = fail_fast && !outcome.valid;
        outcomes.push(outcome);
        if stop {
            break;
        }
    }
    Report {
        outcomes,
        total: drafts.len(),
    }
}
