// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::date;

use hr_admin_domain::{
    Department, Employee, EmployeeDetails, EmployeeFilter, InsuranceTier, MAX_LIST_RESULTS,
};

use crate::Persistence;
use crate::tests::create_test_employee_details;

#[test]
fn test_insert_and_get_employee_round_trip() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let mut details: EmployeeDetails = create_test_employee_details("E-100", Department::Board);
    details.passport_number = Some(String::from("N0012345"));
    details.passport_expiry = Some(date!(2031 - 03 - 15));
    let employee: Employee = Employee::new(details);

    persistence.insert_employee(&employee).unwrap();

    let stored: Option<Employee> = persistence.get_employee(&employee.id).unwrap();
    assert_eq!(stored, Some(employee));
}

#[test]
fn test_get_missing_employee_returns_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.get_employee("no-such-id").unwrap(), None);
}

#[test]
fn test_identical_inserts_create_distinct_records() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let first: Employee = Employee::new(create_test_employee_details("E-1", Department::Board));
    let second: Employee = Employee::new(create_test_employee_details("E-1", Department::Board));

    persistence.insert_employee(&first).unwrap();
    persistence.insert_employee(&second).unwrap();

    let all: Vec<Employee> = persistence
        .list_employees(&EmployeeFilter::default())
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_ne!(all[0].id, all[1].id);
}

#[test]
fn test_list_employees_by_department() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    for (employee_id, department) in [
        ("E-1", Department::HumanResources),
        ("E-2", Department::ProjectWorkers),
        ("E-3", Department::HumanResources),
    ] {
        let employee: Employee = Employee::new(create_test_employee_details(employee_id, department));
        persistence.insert_employee(&employee).unwrap();
    }

    let hr: Vec<Employee> = persistence
        .list_employees(&EmployeeFilter {
            department: Some(Department::HumanResources),
        })
        .unwrap();
    let ids: Vec<&str> = hr.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["E-1", "E-3"]);

    let none: Vec<Employee> = persistence
        .list_employees(&EmployeeFilter {
            department: Some(Department::Administration),
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_list_employees_capped() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let total: i64 = MAX_LIST_RESULTS + 5;
    for n in 0..total {
        let employee: Employee = Employee::new(create_test_employee_details(
            &format!("E-{n}"),
            Department::ProjectWorkers,
        ));
        persistence.insert_employee(&employee).unwrap();
    }

    let listed: Vec<Employee> = persistence
        .list_employees(&EmployeeFilter::default())
        .unwrap();
    assert_eq!(listed.len(), 1000);
    assert_eq!(listed[0].employee_id, "E-0");
    assert_eq!(persistence.count_employees().unwrap(), 1005);
}

#[test]
fn test_update_employee_replaces_fields() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let mut details: EmployeeDetails = create_test_employee_details("E-7", Department::Board);
    details.passport_number = Some(String::from("OLD123"));
    let employee: Employee = Employee::new(details);
    persistence.insert_employee(&employee).unwrap();

    let mut replacement: EmployeeDetails =
        create_test_employee_details("E-7", Department::BusinessDevelopment);
    replacement.position = String::from("Account Director");
    replacement.medical_insurance_tier = InsuranceTier::SeniorPremium21;

    let updated: Employee = persistence
        .update_employee(&employee.id, &replacement)
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, employee.id);
    assert_eq!(updated.created_at, employee.created_at);
    assert!(updated.updated_at >= employee.updated_at);
    assert_eq!(updated.department, Department::BusinessDevelopment);
    assert_eq!(updated.position, "Account Director");
    assert_eq!(updated.medical_insurance_tier, InsuranceTier::SeniorPremium21);
    // Absent optional fields are cleared by a full replace
    assert_eq!(updated.passport_number, None);
}

#[test]
fn test_update_missing_employee_returns_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let details: EmployeeDetails = create_test_employee_details("E-9", Department::Board);

    assert_eq!(persistence.update_employee("missing", &details).unwrap(), None);
    assert_eq!(persistence.count_employees().unwrap(), 0);
}
