use jdm_registry_core::db::open_db_in_memory;
use jdm_registry_core::{
    NewPart, Part, PartRepository, RepoResult, SharedPartRepository, SqlitePartRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

#[test]
fn insert_assigns_unique_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);

    let first = repo
        .insert_part(&NewPart::new("TE37 Wheels", "Nissan Silvia").unwrap())
        .unwrap();
    let second = repo
        .insert_part(&NewPart::new("TE37 Wheels", "Nissan Silvia").unwrap())
        .unwrap();

    assert!(second > first);
    assert_eq!(repo.count_parts().unwrap(), 2);
}

#[test]
fn scan_returns_every_inserted_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);
    let id = repo
        .insert_part(&NewPart::new("Turbo", "Civic").unwrap())
        .unwrap();
    repo.insert_part(&NewPart::new("Brembo Brakes", "Mitsubishi Evo").unwrap())
        .unwrap();

    let parts = collect_parts(&repo).unwrap();
    assert_eq!(parts.len(), 2);
    assert!(parts.contains(&Part {
        id,
        name: "Turbo".to_string(),
        car_model: "Civic".to_string(),
    }));
    let ids: HashSet<_> = parts.iter().map(|part| part.id).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn scan_yields_decode_errors_without_stopping() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);
    repo.insert_part(&NewPart::new("Recaro Seats", "Mazda RX-7").unwrap())
        .unwrap();
    insert_undecodable_row(&conn);
    repo.insert_part(&NewPart::new("Momo Steering Wheel", "Honda NSX").unwrap())
        .unwrap();

    let (ok, failed) = repo
        .scan_parts(|rows| {
            let mut ok = Vec::new();
            let mut failed = 0;
            for row in rows {
                match row {
                    Ok(part) => ok.push(part.name),
                    Err(_) => failed += 1,
                }
            }
            (ok, failed)
        })
        .unwrap();

    assert_eq!(failed, 1);
    assert_eq!(ok, vec!["Recaro Seats", "Momo Steering Wheel"]);
}

#[test]
fn update_name_changes_only_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);
    let id = repo
        .insert_part(&NewPart::new("HKS Turbo Kit", "Toyota AE86").unwrap())
        .unwrap();

    assert_eq!(repo.update_part_name(id, "HKS GT Turbo").unwrap(), 1);

    let parts = collect_parts(&repo).unwrap();
    assert_eq!(parts[0].name, "HKS GT Turbo");
    assert_eq!(parts[0].car_model, "Toyota AE86");
}

#[test]
fn update_and_delete_report_zero_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);
    repo.insert_part(&NewPart::new("Nismo Body Kit", "Honda Civic Type R").unwrap())
        .unwrap();

    assert_eq!(repo.update_part_name(9_999, "ghost").unwrap(), 0);
    assert_eq!(repo.delete_part(9_999).unwrap(), 0);

    let parts = collect_parts(&repo).unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "Nismo Body Kit");
}

#[test]
fn delete_removes_exactly_one_row_and_second_delete_is_zero() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);
    let keep = repo
        .insert_part(&NewPart::new("Ohlins Suspension", "Nissan 350Z").unwrap())
        .unwrap();
    let drop = repo
        .insert_part(&NewPart::new("Greddy Intercooler", "Nissan GT-R").unwrap())
        .unwrap();

    assert_eq!(repo.delete_part(drop).unwrap(), 1);
    assert_eq!(repo.delete_part(drop).unwrap(), 0);

    let ids: Vec<_> = collect_parts(&repo)
        .unwrap()
        .into_iter()
        .map(|part| part.id)
        .collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePartRepository::new(&conn);
    let first = repo
        .insert_part(&NewPart::new("Brembo Brakes", "Mitsubishi Evo").unwrap())
        .unwrap();
    repo.delete_part(first).unwrap();

    let second = repo
        .insert_part(&NewPart::new("Brembo Brakes", "Mitsubishi Evo").unwrap())
        .unwrap();
    assert!(second > first);
}

#[test]
fn shared_repository_delegates_to_sqlite() {
    let repo = SharedPartRepository::new(open_db_in_memory().unwrap());
    let cloned = repo.clone();

    let id = repo
        .insert_part(&NewPart::new("2JZ-GTE Engine", "Toyota Supra").unwrap())
        .unwrap();
    assert_eq!(cloned.count_parts().unwrap(), 1);
    assert_eq!(cloned.update_part_name(id, "2JZ-GTE VVTi").unwrap(), 1);

    let parts = collect_parts(&cloned).unwrap();
    assert_eq!(parts[0].name, "2JZ-GTE VVTi");
    assert_eq!(repo.delete_part(id).unwrap(), 1);
    assert_eq!(repo.count_parts().unwrap(), 0);
}

fn collect_parts<R: PartRepository>(repo: &R) -> RepoResult<Vec<Part>> {
    repo.scan_parts(|rows| rows.filter_map(Result::ok).collect())
}

fn insert_undecodable_row(conn: &Connection) {
    conn.execute(
        "INSERT INTO jdm_parts (name, car_model) VALUES (X'00FF', 'Nissan Skyline');",
        [],
    )
    .unwrap();
}
