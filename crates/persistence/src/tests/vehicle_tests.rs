// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hr_admin_domain::{AssignmentFilter, Vehicle, VehicleDetails, VehicleFilter};

use crate::Persistence;
use crate::tests::create_test_vehicle_details;

fn insert_vehicles(persistence: &mut Persistence) -> (Vehicle, Vehicle) {
    let unassigned: Vehicle = Vehicle::new(create_test_vehicle_details("AUH-1"));
    let mut details: VehicleDetails = create_test_vehicle_details("AUH-2");
    details.assigned_employee_id = Some(String::from("emp-42"));
    details.is_fleet = false;
    let assigned: Vehicle = Vehicle::new(details);

    persistence.insert_vehicle(&unassigned).unwrap();
    persistence.insert_vehicle(&assigned).unwrap();
    (unassigned, assigned)
}

#[test]
fn test_insert_and_get_vehicle_round_trip() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let (unassigned, assigned) = insert_vehicles(&mut persistence);

    assert_eq!(persistence.get_vehicle(&unassigned.id).unwrap(), Some(unassigned));
    let stored: Vehicle = persistence.get_vehicle(&assigned.id).unwrap().unwrap();
    assert!(!stored.is_fleet);
    assert_eq!(stored, assigned);
}

#[test]
fn test_list_vehicles_by_assignment() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let (unassigned, assigned) = insert_vehicles(&mut persistence);

    let all: Vec<Vehicle> = persistence.list_vehicles(&VehicleFilter::default()).unwrap();
    assert_eq!(all, vec![unassigned.clone(), assigned.clone()]);

    let only_assigned: Vec<Vehicle> = persistence
        .list_vehicles(&VehicleFilter {
            assignment: AssignmentFilter::Assigned,
        })
        .unwrap();
    assert_eq!(only_assigned, vec![assigned]);

    let only_unassigned: Vec<Vehicle> = persistence
        .list_vehicles(&VehicleFilter {
            assignment: AssignmentFilter::Unassigned,
        })
        .unwrap();
    assert_eq!(only_unassigned, vec![unassigned]);
}

#[test]
fn test_assign_vehicle_to_unknown_employee_succeeds() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let (unassigned, _) = insert_vehicles(&mut persistence);

    let updated: Vehicle = persistence
        .assign_vehicle(&unassigned.id, "nobody-has-this-id")
        .unwrap()
        .unwrap();

    assert_eq!(
        updated.assigned_employee_id.as_deref(),
        Some("nobody-has-this-id")
    );
    assert_eq!(updated.license_plate, unassigned.license_plate);
    assert_eq!(updated.created_at, unassigned.created_at);
}

#[test]
fn test_assign_missing_vehicle_returns_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.assign_vehicle("missing", "emp-1").unwrap(), None);
}
