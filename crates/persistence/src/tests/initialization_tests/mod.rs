// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test opens an in-memory database, so connection
//! establishment and migration are exercised throughout. The tests here
//! cover isolation between handles, journal modes, file-backed databases
//! and explicit close.

use hr_admin_domain::{Department, Employee, EmployeeFilter};

use crate::tests::create_test_employee_details;
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_in_memory_database_keeps_memory_journal() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.journal_mode().unwrap(), "memory");
}

#[test]
fn test_file_database_uses_wal_journal() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let mut persistence: Persistence =
        Persistence::new_with_file(dir.path().join("wal.db")).unwrap();
    assert_eq!(persistence.journal_mode().unwrap(), "wal");
    persistence.close();
}

#[test]
fn test_reopening_a_file_applies_no_migration_twice() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: std::path::PathBuf = dir.path().join("reopen.db");

    Persistence::new_with_file(&path).unwrap().close();
    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.count_employees().unwrap(), 0);
    reopened.close();
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = Persistence::new_in_memory().unwrap();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    let employee: Employee = Employee::new(create_test_employee_details(
        "E-1",
        Department::Board,
    ));
    db1.insert_employee(&employee).unwrap();

    assert_eq!(db1.count_employees().unwrap(), 1, "db1 should have 1 employee");
    assert_eq!(db2.count_employees().unwrap(), 0, "db2 should be isolated");
}

#[test]
fn test_file_database_survives_reopen() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: std::path::PathBuf = dir.path().join("hr-admin.db");

    let employee: Employee = Employee::new(create_test_employee_details(
        "E-2",
        Department::Financial,
    ));

    let mut first: Persistence = Persistence::new_with_file(&path).unwrap();
    first.insert_employee(&employee).unwrap();
    first.close();

    let mut second: Persistence = Persistence::new_with_file(&path).unwrap();
    let stored: Vec<Employee> = second.list_employees(&EmployeeFilter::default()).unwrap();
    assert_eq!(stored, vec![employee]);
    second.close();
}
