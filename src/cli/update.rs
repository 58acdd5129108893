use dispatcher::{EmergencyId, Store};
use tracing::instrument;

/// Update the status of a recorded emergency.
#[derive(Debug, clap::Parser)]
#[command(about = "Update the status of a recorded emergency")]
pub struct Update {
    /// The identifier of the emergency to update
    id: EmergencyId,

    /// The new status (Pending/Dispatched/Resolved by convention)
    status: String,
}

impl Update {
    #[instrument(skip(self, store))]
    pub fn run(self, mut store: Store) -> anyhow::Result<()> {
        store.update_status(&self.id, &self.status)?;
        println!("Status updated successfully!");
        Ok(())
    }
}
