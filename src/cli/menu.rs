use dialoguer::{Confirm, Input};
use dispatcher::{Emergency, EmergencyId, Kind, Store};
use tracing::instrument;

use super::{list, terminal::Colorize};

/// The interactive menu loop.
///
/// Every user-facing failure is a printed message; the loop only ends on an
/// explicit exit, and the process exits 0 on all paths.
#[derive(Debug, clap::Parser, Default)]
#[command(about = "Run the interactive menu (default)")]
pub struct Menu {}

impl Menu {
    #[instrument(skip(self, store))]
    pub fn run(self, mut store: Store) -> anyhow::Result<()> {
        loop {
            println!("\n===== Emergency Dispatcher Simulator =====");
            println!("1. Add New Emergency");
            println!("2. Update Emergency Status");
            println!("3. Display All Emergencies");
            println!("4. Exit");

            let choice: String = Input::new().with_prompt("Enter your choice").interact_text()?;

            match choice.trim() {
                "1" => add_emergency(&mut store)?,
                "2" => update_status(&mut store)?,
                "3" => {
                    println!("\n===== Current Emergencies =====");
                    print!("{}", list::render(&store));
                }
                "4" => {
                    println!("Exiting Emergency Dispatcher Simulator. Goodbye!");
                    return Ok(());
                }
                _ => println!("Invalid option. Please try again."),
            }
        }
    }
}

/// Collects one new record from the operator and hands it to the store.
///
/// An unrecognised type choice aborts the add before any further prompt; no
/// record is created.
fn add_emergency(store: &mut Store) -> anyhow::Result<()> {
    println!("\nEmergency Type:");
    println!("1. Medical Emergency");
    println!("2. Fire Emergency");
    println!("3. Police Emergency");

    let choice: String = Input::new().with_prompt("Enter type").interact_text()?;
    let choice = choice.trim();
    if !matches!(choice, "1" | "2" | "3") {
        println!("Invalid emergency type!");
        return Ok(());
    }

    let location = prompt_text("Enter location")?;
    let description = prompt_text("Enter description")?;
    let priority: i32 = Input::new()
        .with_prompt("Enter priority (1-5, where 1 is highest)")
        .interact_text()?;

    let kind = match choice {
        "1" => Kind::Medical {
            patient_name: prompt_text("Enter patient name")?,
            condition: prompt_text("Enter condition")?,
            is_urgent: Confirm::new().with_prompt("Is it urgent?").interact()?,
        },
        "2" => Kind::Fire {
            building_type: prompt_text("Enter building type")?,
            severity: Input::new()
                .with_prompt("Enter severity (1-5)")
                .interact_text()?,
            hazardous_materials: Confirm::new()
                .with_prompt("Hazardous materials present?")
                .interact()?,
        },
        _ => Kind::Police {
            crime_type: prompt_text("Enter crime type")?,
            suspect_armed: Confirm::new().with_prompt("Is suspect armed?").interact()?,
            officers_needed: Input::new()
                .with_prompt("Number of officers needed")
                .interact_text()?,
        },
    };

    let emergency = Emergency::new(location, description, priority, kind);
    match store.add(emergency) {
        Ok(()) => println!("{}", "Emergency added successfully!".success()),
        Err(error) => {
            tracing::debug!("add rejected: {error}");
            println!("{}", "Failed to add emergency.".warning());
        }
    }

    Ok(())
}

fn update_status(store: &mut Store) -> anyhow::Result<()> {
    let raw_id: String = Input::new()
        .with_prompt("Enter emergency ID")
        .interact_text()?;
    let status: String = Input::new()
        .with_prompt("Enter new status (Pending/Dispatched/Resolved)")
        .interact_text()?;

    let updated = raw_id
        .parse::<EmergencyId>()
        .is_ok_and(|id| store.update_status(&id, &status).is_ok());

    if updated {
        println!("{}", "Status updated successfully!".success());
    } else {
        println!(
            "{}",
            "Failed to update status. Emergency not found.".warning()
        );
    }

    Ok(())
}

/// Free-text prompt; empty answers are allowed.
fn prompt_text(prompt: &str) -> dialoguer::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}
