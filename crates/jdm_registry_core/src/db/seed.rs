//! Starter inventory for an empty registry.
//!
//! # Invariants
//! - Seeding only happens when the table holds zero rows.
//! - A failed insert is logged and skipped; it never aborts the batch.

use crate::model::part::NewPart;
use crate::repo::part_repo::{PartRepository, RepoResult};
use log::{info, warn};

/// Fixed `(name, car_model)` pairs inserted into an empty store.
pub const STARTER_PARTS: [(&str, &str); 11] = [
    ("RB26DETT Engine", "Nissan Skyline"),
    ("2JZ-GTE Engine", "Toyota Supra"),
    ("TE37 Wheels", "Nissan Silvia"),
    ("Brembo Brakes", "Mitsubishi Evo"),
    ("Momo Steering Wheel", "Honda NSX"),
    ("Recaro Seats", "Mazda RX-7"),
    ("Tomei Expreme Exhaust", "Subaru Impreza"),
    ("HKS Turbo Kit", "Toyota AE86"),
    ("Ohlins Suspension", "Nissan 350Z"),
    ("Nismo Body Kit", "Honda Civic Type R"),
    ("Greddy Intercooler", "Nissan GT-R"),
];

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReport {
    /// Store already had rows; nothing was written.
    Skipped { existing: u64 },
    /// Store was empty; `inserted + failed` equals the item count.
    Seeded { inserted: usize, failed: usize },
}

/// Inserts `items` when the repository is empty.
///
/// # Errors
/// - Returns the repository error when the row count cannot be read.
pub fn seed_if_empty<R: PartRepository>(
    repo: &R,
    items: &[(&str, &str)],
) -> RepoResult<SeedReport> {
    let existing = repo.count_parts()?;
    if existing > 0 {
        info!("event=db_seed module=db status=skipped existing_rows={existing}");
        return Ok(SeedReport::Skipped { existing });
    }

    info!(
        "event=db_seed module=db status=start items={}",
        items.len()
    );
    let mut inserted = 0;
    let mut failed = 0;
    for (name, car_model) in items {
        let outcome = NewPart::new(*name, *car_model)
            .map_err(|err| err.to_string())
            .and_then(|part| repo.insert_part(&part).map_err(|err| err.to_string()));
        match outcome {
            Ok(_) => inserted += 1,
            Err(err) => {
                failed += 1;
                warn!("event=db_seed module=db status=error item={name} error={err}");
            }
        }
    }

    info!("event=db_seed module=db status=ok inserted={inserted} failed={failed}");
    Ok(SeedReport::Seeded { inserted, failed })
}
