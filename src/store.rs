use crate::model::employee::Employee;
use crate::model::record::{AttendanceStatus, DailyRecord, DailyRecords};
use crate::model::settings::Settings;
use crate::utils::ids;
use futures::channel::mpsc::UnboundedSender;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Employee name cannot be empty.")]
    EmptyName,
    #[error("Employee not found")]
    EmployeeNotFound,
}

/// Shared in-memory state. Each store sits behind its own lock; all
/// handlers run as the single logical writer the model assumes. When a
/// mutation touches both stores (cascade delete), take the employees lock
/// before the records lock.
pub struct AppState {
    employees: RwLock<Vec<Employee>>,
    records: RwLock<DailyRecords>,
    settings: RwLock<Settings>,
    dirty: UnboundedSender<()>,
}

impl AppState {
    pub fn new(
        employees: Vec<Employee>,
        records: DailyRecords,
        settings: Settings,
        dirty: UnboundedSender<()>,
    ) -> Self {
        Self {
            employees: RwLock::new(employees),
            records: RwLock::new(records),
            settings: RwLock::new(settings),
            dirty,
        }
    }

    pub fn employees(&self) -> RwLockReadGuard<'_, Vec<Employee>> {
        self.employees.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn employees_mut(&self) -> RwLockWriteGuard<'_, Vec<Employee>> {
        self.employees.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> RwLockReadGuard<'_, DailyRecords> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records_mut(&self) -> RwLockWriteGuard<'_, DailyRecords> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn settings(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn settings_mut(&self) -> RwLockWriteGuard<'_, Settings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wakes the debounced saver. A closed channel (shutdown) is ignored.
    pub fn mark_dirty(&self) {
        let _ = self.dirty.unbounded_send(());
    }
}

/// Appends a new employee with a fresh id. The name must be non-empty
/// after trimming; it is stored as given, not trimmed.
pub fn add_employee(
    employees: &mut Vec<Employee>,
    name: &str,
    phone: &str,
) -> Result<Employee, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    let employee = Employee {
        id: ids::next_employee_id(),
        name: name.to_string(),
        phone: phone.to_string(),
    };
    employees.push(employee.clone());
    Ok(employee)
}

/// Replaces name and phone of the employee with the given id, keeping the id.
pub fn edit_employee(
    employees: &mut [Employee],
    id: &str,
    name: &str,
    phone: &str,
) -> Result<Employee, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    let employee = employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StoreError::EmployeeNotFound)?;
    employee.name = name.to_string();
    employee.phone = phone.to_string();
    Ok(employee.clone())
}

/// Removes the employee and every record keyed to them across all dates.
/// A date whose record list becomes empty loses its key entirely; no
/// empty-list tombstones. Both stores must be mutated together, which is
/// why this takes them as a pair.
pub fn delete_employee(
    employees: &mut Vec<Employee>,
    records: &mut DailyRecords,
    id: &str,
) -> Result<(), StoreError> {
    let before = employees.len();
    employees.retain(|e| e.id != id);
    if employees.len() == before {
        return Err(StoreError::EmployeeNotFound);
    }
    records.retain(|_, day| {
        day.retain(|r| r.employee_id != id);
        !day.is_empty()
    });
    Ok(())
}

/// Upserts the status for (date, employeeId) and returns the resulting
/// record. An existing record keeps its payment; a fresh one starts at 0.
pub fn set_status(
    records: &mut DailyRecords,
    date: &str,
    employee_id: &str,
    status: AttendanceStatus,
) -> DailyRecord {
    let day = records.entry(date.to_string()).or_default();
    match day.iter_mut().find(|r| r.employee_id == employee_id) {
        Some(record) => {
            record.status = status;
            record.clone()
        }
        None => {
            let record = DailyRecord {
                employee_id: employee_id.to_string(),
                status,
                payment: 0.0,
            };
            day.push(record.clone());
            record
        }
    }
}

/// Upserts the payment for (date, employeeId) and returns the resulting
/// record. The payment is clamped to zero from below (a negative value is
/// not an error). A fresh record defaults to present: entering a payment
/// implies the person worked that day.
pub fn set_payment(
    records: &mut DailyRecords,
    date: &str,
    employee_id: &str,
    payment: f64,
) -> DailyRecord {
    let payment = payment.max(0.0);
    let day = records.entry(date.to_string()).or_default();
    match day.iter_mut().find(|r| r.employee_id == employee_id) {
        Some(record) => {
            record.payment = payment;
            record.clone()
        }
        None => {
            let record = DailyRecord {
                employee_id: employee_id.to_string(),
                status: AttendanceStatus::Present,
                payment,
            };
            day.push(record.clone());
            record
        }
    }
}

pub fn record_for<'a>(
    records: &'a DailyRecords,
    date: &str,
    employee_id: &str,
) -> Option<&'a DailyRecord> {
    records
        .get(date)?
        .iter()
        .find(|r| r.employee_id == employee_id)
}
