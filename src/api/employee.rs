use crate::model::employee::Employee;
use crate::store::{self, AppState, StoreError};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmployeePayload {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "555-1234")]
    #[serde(default)]
    pub phone: String,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "message": "Employee name cannot be empty."
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<EmployeePayload>,
) -> impl Responder {
    let result = store::add_employee(&mut state.employees_mut(), &payload.name, &payload.phone);

    match result {
        Ok(employee) => {
            state.mark_dirty();
            info!(employee_id = %employee.id, "Employee created");
            HttpResponse::Created().json(employee)
        }
        Err(e) => HttpResponse::BadRequest().json(json!({ "message": e.to_string() })),
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "All employees, sorted by name", body = Vec<Employee>)
    ),
    tag = "Employee"
)]
pub async fn list_employees(state: web::Data<AppState>) -> impl Responder {
    let mut employees = state.employees().clone();
    employees.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    HttpResponse::Ok().json(employees)
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let employee = state.employees().iter().find(|e| e.id == id).cloned();

    match employee {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => HttpResponse::NotFound().json(json!({ "message": "Employee not found" })),
    }
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<EmployeePayload>,
) -> impl Responder {
    let id = path.into_inner();
    let result = store::edit_employee(
        &mut state.employees_mut(),
        &id,
        &payload.name,
        &payload.phone,
    );

    match result {
        Ok(employee) => {
            state.mark_dirty();
            info!(employee_id = %id, "Employee updated");
            HttpResponse::Ok().json(employee)
        }
        Err(StoreError::EmployeeNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "Employee not found" }))
        }
        Err(e) => HttpResponse::BadRequest().json(json!({ "message": e.to_string() })),
    }
}

/// Delete Employee
///
/// Also removes every attendance record keyed to the employee; dates left
/// with no records lose their key.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    // Directory and record store change together; hold both write locks.
    let result = {
        let mut employees = state.employees_mut();
        let mut records = state.records_mut();
        store::delete_employee(&mut employees, &mut records, &id)
    };

    match result {
        Ok(()) => {
            state.mark_dirty();
            info!(employee_id = %id, "Employee deleted");
            HttpResponse::Ok().json(json!({ "message": "Successfully deleted" }))
        }
        Err(_) => HttpResponse::NotFound().json(json!({ "message": "Employee not found" })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{empty_state, test_config};
    use crate::routes;
    use actix_web::{App, test, web::Data};

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
    async fn create_and_list_employees() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "Zoe", "phone": "111" }))
            .to_request();
        let created: Employee = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.name, "Zoe");
        assert!(!created.id.is_empty());

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "adam" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        // Sorted by name, case-insensitively.
        let req = test::TestRequest::get().uri("/api/v1/employees").to_request();
        let listed: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "adam");
        assert_eq!(listed[1].name, "Zoe");
    }

    #[actix_web::test]
    async fn whitespace_name_is_rejected() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        assert!(state.employees().is_empty());
    }

    #[actix_web::test]
    async fn update_and_get_round_trip() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "John" }))
            .to_request();
        let created: Employee = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employees/{}", created.id))
            .set_json(json!({ "name": "Jane", "phone": "777" }))
            .to_request();
        let updated: Employee = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Jane");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/employees/{}", created.id))
            .to_request();
        let fetched: Employee = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.phone, "777");
    }

    #[actix_web::test]
    async fn unknown_employee_is_404() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/v1/employees/12345")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::delete()
            .uri("/api/v1/employees/12345")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn delete_cascades_into_records() {
        let (state, _rx) = empty_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "John" }))
            .to_request();
        let john: Employee = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "Jane" }))
            .to_request();
        let jane: Employee = test::call_and_read_body_json(&app, req).await;

        for id in [&john.id, &jane.id] {
            let req = test::TestRequest::put()
                .uri("/api/v1/attendance/status")
                .set_json(json!({
                    "date": "2024-02-01",
                    "employeeId": id,
                    "status": "present"
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);
        }

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/employees/{}", john.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let records = state.records();
        let day = records.get("2024-02-01").unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].employee_id, jane.id);
    }
}
