use serde::Serialize;
use utoipa::ToSchema;

/// Per-employee counts and payment total for one selected month. Derived,
/// never persisted; recomputed on every query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "present": 18,
        "absent": 3,
        "halfDay": 2,
        "totalPayment": 9500.0
    })
)]
pub struct EmployeeMonthlyStats {
    pub present: u32,
    pub absent: u32,
    pub half_day: u32,
    pub total_payment: f64,
}

/// Whole-directory rollup of one month's stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    #[schema(example = 5)]
    pub total_employees: usize,
    #[schema(example = 92)]
    pub present_days: u32,
    #[schema(example = 11)]
    pub absent_days: u32,
    #[schema(example = 7)]
    pub half_days: u32,
    #[schema(example = 48250.0)]
    pub total_payments: f64,
    #[schema(example = 9650.0)]
    pub average_payment: f64,
}
