//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdir_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use staffdir_core::{Department, DirectoryService, EmployeeDraft, Role, SqliteStorage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut directory = DirectoryService::open(SqliteStorage::open_in_memory()?)?;

    let created = directory.create(&EmployeeDraft::new(
        "Ada Lovelace",
        "ada@example.test",
        Department::It,
        Role::Developer,
    ))?;

    println!("staffdir_core version={}", staffdir_core::core_version());
    println!("created id={} name={}", created.id, created.name);
    for record in directory.search("ada") {
        println!(
            "hit id={} department={} role={}",
            record.id, record.department, record.role
        );
    }

    Ok(())
}
