use crate::model::record::{AttendanceStatus, DailyRecord};
use crate::store::{self, AppState};
use crate::utils::date::local_date_key;
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DayQuery {
    /// Date as `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    pub employee_id: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetStatus {
    #[schema(example = "2024-02-10")]
    pub date: String,
    #[schema(example = "1721894400000")]
    pub employee_id: String,
    pub status: AttendanceStatus,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPayment {
    #[schema(example = "2024-02-10")]
    pub date: String,
    #[schema(example = "1721894400000")]
    pub employee_id: String,
    /// Negative values are clamped to 0, not rejected.
    #[schema(example = 500.0)]
    pub payment: f64,
}

// Incoming dates are re-rendered through local_date_key so store keys are
// always canonical zero-padded form, whatever padding the client sent.
fn canonical_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(local_date_key)
}

fn bad_date() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": "Invalid date, expected YYYY-MM-DD" }))
}

/// Day's records
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(DayQuery),
    responses(
        (status = 200, description = "Records stored for the date", body = Vec<DailyRecord>),
        (status = 400, description = "Invalid date")
    ),
    tag = "Attendance"
)]
pub async fn day_records(state: web::Data<AppState>, query: web::Query<DayQuery>) -> impl Responder {
    let Some(date) = canonical_date(&query.date) else {
        return bad_date();
    };
    let records = state
        .records()
        .get(&date)
        .cloned()
        .unwrap_or_default();
    HttpResponse::Ok().json(records)
}

/// One employee's record for a date
#[utoipa::path(
    get,
    path = "/api/v1/attendance/record",
    params(RecordQuery),
    responses(
        (status = 200, description = "Stored record", body = DailyRecord),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "No record for that date and employee")
    ),
    tag = "Attendance"
)]
pub async fn employee_record(
    state: web::Data<AppState>,
    query: web::Query<RecordQuery>,
) -> impl Responder {
    let Some(date) = canonical_date(&query.date) else {
        return bad_date();
    };
    let record = store::record_for(&state.records(), &date, &query.employee_id).cloned();

    match record {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(json!({ "message": "Record not found" })),
    }
}

/// Set attendance status
///
/// Upserts the record for (date, employee): an existing record keeps its
/// payment, a fresh one starts at 0.
#[utoipa::path(
    put,
    path = "/api/v1/attendance/status",
    request_body = SetStatus,
    responses(
        (status = 200, description = "Updated record", body = DailyRecord),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn set_status(
    state: web::Data<AppState>,
    payload: web::Json<SetStatus>,
) -> impl Responder {
    let Some(date) = canonical_date(&payload.date) else {
        return bad_date();
    };
    if !state.employees().iter().any(|e| e.id == payload.employee_id) {
        return HttpResponse::NotFound().json(json!({ "message": "Employee not found" }));
    }

    let record = store::set_status(
        &mut state.records_mut(),
        &date,
        &payload.employee_id,
        payload.status,
    );
    state.mark_dirty();

    HttpResponse::Ok().json(record)
}

/// Set payment
///
/// Upserts the record for (date, employee). A payment against a day with
/// no record implies the person worked, so the inserted record defaults
/// to present.
#[utoipa::path(
    put,
    path = "/api/v1/attendance/payment",
    request_body = SetPayment,
    responses(
        (status = 200, description = "Updated record", body = DailyRecord),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn set_payment(
    state: web::Data<AppState>,
    payload: web::Json<SetPayment>,
) -> impl Responder {
    let Some(date) = canonical_date(&payload.date) else {
        return bad_date();
    };
    if !state.employees().iter().any(|e| e.id == payload.employee_id) {
        return HttpResponse::NotFound().json(json!({ "message": "Employee not found" }));
    }

    let record = store::set_payment(
        &mut state.records_mut(),
        &date,
        &payload.employee_id,
        payload.payment,
    );
    state.mark_dirty();

    HttpResponse::Ok().json(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{empty_state, test_config};
    use crate::model::employee::Employee;
    use crate::routes;
    use actix_web::{App, test, web::Data};

    macro_rules! seeded_employee {
        ($app:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/employees")
                .set_json(json!({ "name": "John" }))
                .to_request();
            let employee: Employee = test::call_and_read_body_json(&$app, req).await;
            employee
        }};
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .app_data(Data::new(test_config()))
                    .configure(|cfg| routes::configure(cfg, test_config())),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn status_then_payment_flow() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);
        let employee = seeded_employee!(app);

        let req = test::TestRequest::put()
            .uri("/api/v1/attendance/status")
            .set_json(json!({
                "date": "2024-02-10",
                "employeeId": employee.id,
                "status": "half-day"
            }))
            .to_request();
        let record: DailyRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.status, AttendanceStatus::HalfDay);
        assert_eq!(record.payment, 0.0);

        let req = test::TestRequest::put()
            .uri("/api/v1/attendance/payment")
            .set_json(json!({
                "date": "2024-02-10",
                "employeeId": employee.id,
                "payment": 250.0
            }))
            .to_request();
        let record: DailyRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.status, AttendanceStatus::HalfDay);
        assert_eq!(record.payment, 250.0);

        let req = test::TestRequest::get()
            .uri("/api/v1/attendance?date=2024-02-10")
            .to_request();
        let day: Vec<DailyRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(day.len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/v1/attendance/record?date=2024-02-10&employeeId={}",
                employee.id
            ))
            .to_request();
        let record: DailyRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.payment, 250.0);

        let req = test::TestRequest::get()
            .uri("/api/v1/attendance/record?date=2024-02-11&employeeId=whoever")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn negative_payment_comes_back_clamped() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);
        let employee = seeded_employee!(app);

        let req = test::TestRequest::put()
            .uri("/api/v1/attendance/payment")
            .set_json(json!({
                "date": "2024-02-10",
                "employeeId": employee.id,
                "payment": -75.0
            }))
            .to_request();
        let record: DailyRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.payment, 0.0);
        assert_eq!(record.status, AttendanceStatus::Present);
    }

    #[actix_web::test]
    async fn unknown_employee_and_bad_date_are_rejected() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/v1/attendance/status")
            .set_json(json!({
                "date": "2024-02-10",
                "employeeId": "nope",
                "status": "present"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let employee = seeded_employee!(app);
        let req = test::TestRequest::put()
            .uri("/api/v1/attendance/status")
            .set_json(json!({
                "date": "not-a-date",
                "employeeId": employee.id,
                "status": "present"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn date_keys_are_canonicalized() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);
        let employee = seeded_employee!(app);

        // Unpadded month and day still land under the canonical key.
        let req = test::TestRequest::put()
            .uri("/api/v1/attendance/status")
            .set_json(json!({
                "date": "2024-2-5",
                "employeeId": employee.id,
                "status": "present"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        assert!(state.records().contains_key("2024-02-05"));
    }

    #[actix_web::test]
    async fn empty_day_reads_as_empty_list() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/v1/attendance?date=2024-02-10")
            .to_request();
        let day: Vec<DailyRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(day.is_empty());
    }
}
