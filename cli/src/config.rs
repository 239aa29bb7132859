use anyhow::{Result, anyhow};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub report_format: ReportFormat,
    pub fail_fast: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let report_format = match lookup("EMPLOYEE_REPORT_FORMAT") {
            Some(raw) if !raw.trim().is_empty() => ReportFormat::from_str(raw.trim(), true)
                .map_err(|_| anyhow!("invalid EMPLOYEE_REPORT_FORMAT {:?}", raw))?,
            _ => ReportFormat::default(),
        };

        let fail_fast = lookup("EMPLOYEE_FAIL_FAST")
            .map(|val| matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            report_format,
            fail_fast,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_format_and_fail_fast() {
        let config = load(&[
            ("EMPLOYEE_REPORT_FORMAT", "JSON"),
            ("EMPLOYEE_FAIL_FAST", "Yes"),
        ])
        .unwrap();
        assert_eq!(config.report_format, ReportFormat::Json);
        assert!(config.fail_fast);
    }

    #[test]
    fn unknown_fail_fast_value_is_off() {
        assert!(!load(&[("EMPLOYEE_FAIL_FAST", "maybe")]).unwrap().fail_fast);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = load(&[("EMPLOYEE_REPORT_FORMAT", "xml")]).unwrap_err();
        assert!(err.to_string().contains("EMPLOYEE_REPORT_FORMAT"));
    }
}
