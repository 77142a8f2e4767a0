//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `part_core` linkage.
//! - Show the persisted collections at a glance for quick local checks.

use part_core::{JsonFileStorage, Organizer};

fn main() {
    println!("part_core version={}", part_core::core_version());

    let data_dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("part");

    match JsonFileStorage::open(&data_dir) {
        Ok(storage) => {
            let organizer = Organizer::open(storage);
            println!("data_dir={}", data_dir.display());
            println!(
                "projects={} areas={} references={} tasks={} task_groups={}",
                organizer.projects().len(),
                organizer.areas().len(),
                organizer.references().len(),
                organizer.tasks().len(),
                organizer.task_groups().len()
            );
        }
        Err(err) => {
            eprintln!("failed to open data dir `{}`: {err}", data_dir.display());
            std::process::exit(1);
        }
    }
}
