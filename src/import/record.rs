use serde::Deserialize;

/// One raw row of the events source, as written by the order/demo backends.
///
/// Keys are accepted in snake_case or camelCase. Dates may carry a time
/// part; only the calendar day is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    pub id: i64,
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "installationDate")]
    pub installation_date: Option<String>,
    #[serde(default, alias = "demoStartDate")]
    pub demo_start_date: Option<String>,
    #[serde(default, alias = "demoEndDate")]
    pub demo_end_date: Option<String>,
}

/// Non-blank value of an optional text field.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
