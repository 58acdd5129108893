use dispatcher::{Emergency, Kind, Store};
use serde_json::json;
use tracing::instrument;

/// List recorded emergencies.
#[derive(Debug, clap::Parser, Default)]
#[command(about = "List recorded emergencies")]
pub struct List {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run(self, store: &Store) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Table => print!("{}", render(store)),
            OutputFormat::Json => {
                let records: Vec<_> = store.iter().map(json_record).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
        }
        Ok(())
    }
}

/// Renders every record in insertion order, or the fixed message when the
/// store is empty.
pub fn render(store: &Store) -> String {
    if store.is_empty() {
        return "No emergencies recorded.\n".to_string();
    }

    store.iter().map(ToString::to_string).collect()
}

fn json_record(emergency: &Emergency) -> serde_json::Value {
    match emergency.kind() {
        Kind::Medical {
            patient_name,
            condition,
            is_urgent,
        } => json!({
            "type": emergency.kind().tag(),
            "id": emergency.id().to_string(),
            "location": emergency.location(),
            "description": emergency.description(),
            "priority": emergency.priority(),
            "status": emergency.status(),
            "patient_name": patient_name,
            "condition": condition,
            "is_urgent": is_urgent,
        }),
        Kind::Fire {
            building_type,
            severity,
            hazardous_materials,
        } => json!({
            "type": emergency.kind().tag(),
            "id": emergency.id().to_string(),
            "location": emergency.location(),
            "description": emergency.description(),
            "priority": emergency.priority(),
            "status": emergency.status(),
            "building_type": building_type,
            "severity": severity,
            "hazardous_materials": hazardous_materials,
        }),
        Kind::Police {
            crime_type,
            suspect_armed,
            officers_needed,
        } => json!({
            "type": emergency.kind().tag(),
            "id": emergency.id().to_string(),
            "location": emergency.location(),
            "description": emergency.description(),
            "priority": emergency.priority(),
            "status": emergency.status(),
            "crime_type": crime_type,
            "suspect_armed": suspect_armed,
            "officers_needed": officers_needed,
        }),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn empty_store_renders_fixed_message() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().join("emergencies.txt"), 100);

        assert_eq!(render(&store), "No emergencies recorded.\n");
    }

    #[test]
    fn records_render_in_insertion_order() {
        let tmp = TempDir::new().unwrap();
        let mut store = Store::open(tmp.path().join("emergencies.txt"), 100);
        store
            .add(Emergency::new(
                "123 Main St".to_string(),
                "chest pain".to_string(),
                1,
                Kind::Medical {
                    patient_name: "Jane Doe".to_string(),
                    condition: "cardiac".to_string(),
                    is_urgent: true,
                },
            ))
            .unwrap();
        store
            .add(Emergency::new(
                "Warehouse".to_string(),
                "smoke".to_string(),
                2,
                Kind::Fire {
                    building_type: "Industrial".to_string(),
                    severity: 4,
                    hazardous_materials: false,
                },
            ))
            .unwrap();

        let expected: String = store.iter().map(ToString::to_string).collect();
        assert_eq!(render(&store), expected);

        let medical_at = expected.find("Type: Medical Emergency").unwrap();
        let fire_at = expected.find("Type: Fire Emergency").unwrap();
        assert!(medical_at < fire_at);
    }

    #[test]
    fn json_record_carries_variant_fields() {
        let emergency = Emergency::new(
            "5th Ave".to_string(),
            "robbery in progress".to_string(),
            2,
            Kind::Police {
                crime_type: "Robbery".to_string(),
                suspect_armed: true,
                officers_needed: 3,
            },
        );

        let value = json_record(&emergency);

        assert_eq!(value["type"], "Police");
        assert_eq!(value["id"], emergency.id().to_string());
        assert_eq!(value["location"], "5th Ave");
        assert_eq!(value["priority"], 2);
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["crime_type"], "Robbery");
        assert_eq!(value["suspect_armed"], true);
        assert_eq!(value["officers_needed"], 3);
    }
}
