use crate::config::Config;
use crate::model::employee::Employee;
use crate::model::stats::{EmployeeMonthlyStats, MonthlySummary};
use crate::store::AppState;
use crate::summary::{self, MonthOption, SummaryPolicy};
use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    /// Month as `YYYY-MM`. Malformed values yield all-zero stats.
    pub month: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeSummary {
    pub employee: Employee,
    pub stats: EmployeeMonthlyStats,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[schema(example = "2024-02")]
    pub month: String,
    pub policy: SummaryPolicy,
    pub data: Vec<EmployeeSummary>,
    pub summary: MonthlySummary,
}

/// Monthly summary
///
/// Per-employee stats for the selected month under the configured
/// aggregation policy, plus the directory-wide rollup. Always recomputed
/// from the live in-memory stores.
#[utoipa::path(
    get,
    path = "/api/v1/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Stats for every employee", body = SummaryResponse)
    ),
    tag = "Summary"
)]
pub async fn get_summary(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    query: web::Query<SummaryQuery>,
) -> impl Responder {
    let today = Local::now().date_naive();

    let mut employees = state.employees().clone();
    employees.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let records = state.records();
    let data: Vec<EmployeeSummary> = employees
        .into_iter()
        .map(|employee| {
            let stats = summary::employee_monthly_stats(
                config.summary_policy,
                &employee.id,
                &records,
                &query.month,
                today,
            );
            EmployeeSummary { employee, stats }
        })
        .collect();

    let stats: Vec<EmployeeMonthlyStats> = data.iter().map(|s| s.stats).collect();
    let rollup = summary::overall_summary(&stats);

    HttpResponse::Ok().json(SummaryResponse {
        month: query.into_inner().month,
        policy: config.summary_policy,
        data,
        summary: rollup,
    })
}

/// Month options
///
/// Months with stored records plus the current month, newest first, as
/// value/label pairs for a selection field.
#[utoipa::path(
    get,
    path = "/api/v1/summary/months",
    responses(
        (status = 200, description = "Selectable months", body = Vec<MonthOption>)
    ),
    tag = "Summary"
)]
pub async fn list_months(state: web::Data<AppState>) -> impl Responder {
    let today = Local::now().date_naive();
    let options = summary::month_options(&state.records(), today);
    HttpResponse::Ok().json(options)
}
