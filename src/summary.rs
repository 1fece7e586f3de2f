use crate::model::record::{AttendanceStatus, DailyRecord, DailyRecords};
use crate::model::stats::{EmployeeMonthlyStats, MonthlySummary};
use crate::utils::date::{days_in_month, month_key, parse_month_key};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use utoipa::ToSchema;

/// The two aggregation policies found in this product's lineage. They are
/// mutually incompatible and must never be blended; the deployment picks
/// one at startup via `SUMMARY_POLICY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryPolicy {
    /// Walk every calendar day of the month up to today; a day in that
    /// horizon with no record counts as an absence. Future days, and
    /// future months entirely, contribute nothing.
    CalendarComplete,
    /// Count only days with a stored record; nothing is inferred and
    /// "today" plays no part.
    SparseFilter,
}

/// Monthly counts and payment total for one employee. Malformed month
/// keys yield all-zero stats, never an error.
pub fn employee_monthly_stats(
    policy: SummaryPolicy,
    employee_id: &str,
    records: &DailyRecords,
    selected_month: &str,
    today: NaiveDate,
) -> EmployeeMonthlyStats {
    let Some((year, month)) = parse_month_key(selected_month) else {
        return EmployeeMonthlyStats::default();
    };
    match policy {
        SummaryPolicy::CalendarComplete => {
            calendar_complete(employee_id, records, year, month, today)
        }
        SummaryPolicy::SparseFilter => sparse_filter(employee_id, records, year, month),
    }
}

fn calendar_complete(
    employee_id: &str,
    records: &DailyRecords,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> EmployeeMonthlyStats {
    let horizon = match (year, month).cmp(&(today.year(), today.month())) {
        Ordering::Less => days_in_month(year, month),
        Ordering::Equal => today.day(),
        Ordering::Greater => 0,
    };

    let mut stats = EmployeeMonthlyStats::default();
    for day in 1..=horizon {
        let key = format!("{year:04}-{month:02}-{day:02}");
        match records
            .get(&key)
            .and_then(|day_records| day_records.iter().find(|r| r.employee_id == employee_id))
        {
            Some(record) => tally(&mut stats, record),
            // Iterated days are never in the future, so a missing record
            // reads as an absence.
            None => stats.absent += 1,
        }
    }
    stats
}

fn sparse_filter(
    employee_id: &str,
    records: &DailyRecords,
    year: i32,
    month: u32,
) -> EmployeeMonthlyStats {
    let prefix = format!("{year:04}-{month:02}-");
    let mut stats = EmployeeMonthlyStats::default();
    for day in records
        .iter()
        .filter(|(date, _)| date.starts_with(&prefix))
        .map(|(_, day)| day)
    {
        if let Some(record) = day.iter().find(|r| r.employee_id == employee_id) {
            tally(&mut stats, record);
        }
    }
    stats
}

fn tally(stats: &mut EmployeeMonthlyStats, record: &DailyRecord) {
    match record.status {
        AttendanceStatus::Present => stats.present += 1,
        AttendanceStatus::Absent => stats.absent += 1,
        AttendanceStatus::HalfDay => stats.half_day += 1,
    }
    stats.total_payment += record.payment;
}

/// Rolls per-employee stats up into the directory-wide summary.
pub fn overall_summary(stats: &[EmployeeMonthlyStats]) -> MonthlySummary {
    let total_payments: f64 = stats.iter().map(|s| s.total_payment).sum();
    MonthlySummary {
        total_employees: stats.len(),
        present_days: stats.iter().map(|s| s.present).sum(),
        absent_days: stats.iter().map(|s| s.absent).sum(),
        half_days: stats.iter().map(|s| s.half_day).sum(),
        total_payments,
        average_payment: if stats.is_empty() {
            0.0
        } else {
            total_payments / stats.len() as f64
        },
    }
}

/// One entry of the month selection field: the machine key plus a human
/// label, e.g. `("2024-02", "February 2024")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"value": "2024-02", "label": "February 2024"}))]
pub struct MonthOption {
    pub value: String,
    pub label: String,
}

/// Distinct months appearing in the record store plus the current month,
/// newest first.
pub fn month_options(records: &DailyRecords, today: NaiveDate) -> Vec<MonthOption> {
    let mut months: BTreeSet<String> = records
        .keys()
        .filter_map(|date| date.get(0..7).map(str::to_string))
        .collect();
    months.insert(month_key(today));

    months
        .into_iter()
        .rev()
        .filter_map(|value| {
            let (year, month) = parse_month_key(&value)?;
            let label = NaiveDate::from_ymd_opt(year, month, 1)?
                .format("%B %Y")
                .to_string();
            Some(MonthOption { value, label })
        })
        .collect()
}
