use crate::api::attendance::{SetPayment, SetStatus};
use crate::api::employee::EmployeePayload;
use crate::api::settings::UpdateSettings;
use crate::api::summary::{EmployeeSummary, SummaryResponse};
use crate::model::employee::Employee;
use crate::model::record::{AttendanceStatus, DailyRecord};
use crate::model::settings::{Settings, Theme};
use crate::model::stats::{EmployeeMonthlyStats, MonthlySummary};
use crate::summary::{MonthOption, SummaryPolicy};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Tracker

Single-tenant attendance and payroll tracking.

### Key Features
- **Employee Directory**
  - Add, edit, list, and delete employees (deletes cascade into records)
- **Daily Tracking**
  - Per-day attendance status and payment upserts
- **Monthly Summary**
  - Per-employee counts and payment totals under an explicit aggregation policy
- **Settings**
  - Persisted UI theme

### Persistence
State lives in memory and is flushed to JSON files by a debounced background saver.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::day_records,
        crate::api::attendance::employee_record,
        crate::api::attendance::set_status,
        crate::api::attendance::set_payment,

        crate::api::summary::get_summary,
        crate::api::summary::list_months,

        crate::api::settings::get_settings,
        crate::api::settings::update_settings,

        crate::api::assistant::proxy
    ),
    components(
        schemas(
            Employee,
            EmployeePayload,
            AttendanceStatus,
            DailyRecord,
            SetStatus,
            SetPayment,
            EmployeeMonthlyStats,
            MonthlySummary,
            EmployeeSummary,
            SummaryResponse,
            SummaryPolicy,
            MonthOption,
            Theme,
            Settings,
            UpdateSettings
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Daily attendance and payment APIs"),
        (name = "Summary", description = "Monthly aggregation APIs"),
        (name = "Settings", description = "Process-wide settings APIs"),
        (name = "Assistant", description = "Credentialed pass-through proxy"),
    )
)]
pub struct ApiDoc;
