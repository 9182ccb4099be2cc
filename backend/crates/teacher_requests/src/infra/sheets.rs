//! Sheets-Backed Response Source

use std::sync::Arc;

use platform::google::SheetsClient;

use crate::domain::source::ResponseSource;
use crate::error::TeacherRequestsResult;

pub struct SheetsResponseSource {
    sheets: Arc<SheetsClient>,
    range: String,
}

impl SheetsResponseSource {
    pub fn new(sheets: Arc<SheetsClient>, range: impl Into<String>) -> Self {
        Self {
            sheets,
            range: range.into(),
        }
    }
}

impl ResponseSource for SheetsResponseSource {
    async fn rows(&self) -> TeacherRequestsResult<Vec<Vec<String>>> {
        let rows = self.sheets.values_get(&self.range).await?;
        Ok(rows)
    }
}
