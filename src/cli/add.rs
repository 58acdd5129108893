use clap::Args;
use dispatcher::{Emergency, Kind, Store};
use tracing::instrument;

/// Record a new emergency without going through the interactive menu.
#[derive(Debug, clap::Parser)]
#[command(about = "Record a new emergency")]
pub struct Add {
    #[command(subcommand)]
    kind: AddKind,
}

#[derive(Debug, clap::Subcommand)]
enum AddKind {
    /// A medical emergency
    Medical {
        #[command(flatten)]
        common: Common,

        /// Name of the patient
        #[arg(long)]
        patient: String,

        /// The reported condition
        #[arg(long)]
        condition: String,

        /// Mark the condition as urgent
        #[arg(long)]
        urgent: bool,
    },

    /// A fire emergency
    Fire {
        #[command(flatten)]
        common: Common,

        /// The kind of building involved
        #[arg(long)]
        building: String,

        /// Severity (1-5)
        #[arg(long)]
        severity: i32,

        /// Hazardous materials are present
        #[arg(long)]
        hazmat: bool,
    },

    /// A police emergency
    Police {
        #[command(flatten)]
        common: Common,

        /// The kind of crime reported
        #[arg(long)]
        crime: String,

        /// The suspect is armed
        #[arg(long)]
        armed: bool,

        /// Number of officers needed
        #[arg(long)]
        officers: i32,
    },
}

#[derive(Debug, Args)]
struct Common {
    /// Where the incident is
    #[arg(long)]
    location: String,

    /// What happened
    #[arg(long)]
    description: String,

    /// Priority (1-5, where 1 is highest)
    #[arg(long)]
    priority: i32,
}

impl Add {
    #[instrument(skip(self, store))]
    pub fn run(self, mut store: Store) -> anyhow::Result<()> {
        let (common, kind) = match self.kind {
            AddKind::Medical {
                common,
                patient,
                condition,
                urgent,
            } => (
                common,
                Kind::Medical {
                    patient_name: patient,
                    condition,
                    is_urgent: urgent,
                },
            ),
            AddKind::Fire {
                common,
                building,
                severity,
                hazmat,
            } => (
                common,
                Kind::Fire {
                    building_type: building,
                    severity,
                    hazardous_materials: hazmat,
                },
            ),
            AddKind::Police {
                common,
                crime,
                armed,
                officers,
            } => (
                common,
                Kind::Police {
                    crime_type: crime,
                    suspect_armed: armed,
                    officers_needed: officers,
                },
            ),
        };

        let emergency = Emergency::new(common.location, common.description, common.priority, kind);
        let id = emergency.id().clone();
        store.add(emergency)?;

        println!("Added emergency {id}");
        Ok(())
    }
}
