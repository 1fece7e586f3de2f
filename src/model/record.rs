use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
}

/// One employee's attendance and payment for one date. Keyed by the pair
/// (date, employeeId); a date holds at most one record per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeId": "1721894400000",
        "status": "present",
        "payment": 500.0
    })
)]
pub struct DailyRecord {
    pub employee_id: String,
    pub status: AttendanceStatus,
    pub payment: f64,
}

/// Sparse map from `YYYY-MM-DD` date key to that day's records. A missing
/// key means no explicit records that day, not "everyone absent".
pub type DailyRecords = BTreeMap<String, Vec<DailyRecord>>;
