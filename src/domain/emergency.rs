use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::EmergencyId;

/// A single emergency incident record.
///
/// Every record carries the common dispatch fields plus exactly one
/// [`Kind`], which holds the variant-specific data and selects the
/// rendering and serialization behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emergency {
    /// Identifier derived from the creation time. Not guaranteed unique.
    id: EmergencyId,
    /// Free-text location of the incident.
    location: String,
    /// Free-text description of the incident.
    description: String,
    /// Priority 1-5, where 1 is the highest. Not validated.
    priority: i32,
    /// Dispatch status. `"Pending"`, `"Dispatched"` or `"Resolved"` by
    /// convention, but stored as free text and never validated.
    status: String,
    /// Creation time. Used only to derive the identifier; not persisted.
    created: DateTime<Utc>,
    /// The variant-specific data.
    kind: Kind,
}

/// The closed set of emergency variants.
///
/// Exactly one variant per record. The variant's tag string (see
/// [`Kind::tag`]) selects the serialization branch on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A medical emergency.
    Medical {
        /// Name of the patient.
        patient_name: String,
        /// The reported condition.
        condition: String,
        /// Whether the condition is urgent.
        is_urgent: bool,
    },
    /// A fire emergency.
    Fire {
        /// The kind of building involved.
        building_type: String,
        /// Severity 1-5. Not validated.
        severity: i32,
        /// Whether hazardous materials are present.
        hazardous_materials: bool,
    },
    /// A police emergency.
    Police {
        /// The kind of crime reported.
        crime_type: String,
        /// Whether the suspect is armed.
        suspect_armed: bool,
        /// Number of officers requested. Not validated.
        officers_needed: i32,
    },
}

impl Kind {
    /// The fixed tag string identifying this variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Medical { .. } => "Medical",
            Self::Fire { .. } => "Fire",
            Self::Police { .. } => "Police",
        }
    }
}

impl Emergency {
    /// Construct a new record.
    ///
    /// The creation time is sampled from the system clock; the identifier
    /// is derived from it. The status starts as `"Pending"`.
    #[must_use]
    pub fn new(location: String, description: String, priority: i32, kind: Kind) -> Self {
        Self::new_at(location, description, priority, kind, Utc::now())
    }

    pub(crate) fn new_at(
        location: String,
        description: String,
        priority: i32,
        kind: Kind,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EmergencyId::from_timestamp(created.timestamp()),
            location,
            description,
            priority,
            status: "Pending".to_string(),
            created,
            kind,
        }
    }

    /// The record's identifier.
    #[must_use]
    pub const fn id(&self) -> &EmergencyId {
        &self.id
    }

    /// The incident location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The incident description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The priority (1-5, 1 highest, by convention).
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// The current dispatch status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// When the record was created.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// The variant-specific data.
    #[must_use]
    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Replace the status unconditionally.
    ///
    /// Any value is accepted; the conventional transition
    /// `Pending -> Dispatched -> Resolved` is not enforced.
    pub fn update_status(&mut self, new_status: String) {
        self.status = new_status;
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

impl fmt::Display for Emergency {
    /// Renders the human-readable multi-line form: the common fields, the
    /// variant-specific fields, then a trailing separator line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Emergency ID: {}", self.id)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Priority: {}", self.priority)?;
        writeln!(f, "Status: {}", self.status)?;

        match &self.kind {
            Kind::Medical {
                patient_name,
                condition,
                is_urgent,
            } => {
                writeln!(f, "Type: Medical Emergency")?;
                writeln!(f, "Patient: {patient_name}")?;
                writeln!(f, "Condition: {condition}")?;
                writeln!(f, "Urgent: {}", yes_no(*is_urgent))?;
            }
            Kind::Fire {
                building_type,
                severity,
                hazardous_materials,
            } => {
                writeln!(f, "Type: Fire Emergency")?;
                writeln!(f, "Building Type: {building_type}")?;
                writeln!(f, "Severity (1-5): {severity}")?;
                writeln!(f, "Hazardous Materials: {}", yes_no(*hazardous_materials))?;
            }
            Kind::Police {
                crime_type,
                suspect_armed,
                officers_needed,
            } => {
                writeln!(f, "Type: Police Emergency")?;
                writeln!(f, "Crime Type: {crime_type}")?;
                writeln!(f, "Suspect Armed: {}", yes_no(*suspect_armed))?;
                writeln!(f, "Officers Needed: {officers_needed}")?;
            }
        }

        writeln!(f, "------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medical() -> Emergency {
        Emergency::new(
            "123 Main St".to_string(),
            "chest pain".to_string(),
            1,
            Kind::Medical {
                patient_name: "Jane Doe".to_string(),
                condition: "cardiac".to_string(),
                is_urgent: true,
            },
        )
    }

    #[test]
    fn new_record_starts_pending() {
        let emergency = medical();
        assert_eq!(emergency.status(), "Pending");
    }

    #[test]
    fn id_is_derived_from_creation_time() {
        let emergency = medical();
        let expected = EmergencyId::from_timestamp(emergency.created().timestamp());
        assert_eq!(emergency.id(), &expected);
    }

    #[test]
    fn update_status_replaces_unconditionally() {
        let mut emergency = medical();
        emergency.update_status("Resolved".to_string());
        assert_eq!(emergency.status(), "Resolved");

        // Free text is accepted; the conventional values are not enforced.
        emergency.update_status("On Hold".to_string());
        assert_eq!(emergency.status(), "On Hold");
    }

    #[test]
    fn tags_are_fixed_per_variant() {
        assert_eq!(medical().kind().tag(), "Medical");
        assert_eq!(
            Kind::Fire {
                building_type: String::new(),
                severity: 1,
                hazardous_materials: false,
            }
            .tag(),
            "Fire"
        );
        assert_eq!(
            Kind::Police {
                crime_type: String::new(),
                suspect_armed: false,
                officers_needed: 0,
            }
            .tag(),
            "Police"
        );
    }

    #[test]
    fn render_medical() {
        let emergency = medical();
        let expected = format!(
            "Emergency ID: {}\n\
             Location: 123 Main St\n\
             Description: chest pain\n\
             Priority: 1\n\
             Status: Pending\n\
             Type: Medical Emergency\n\
             Patient: Jane Doe\n\
             Condition: cardiac\n\
             Urgent: Yes\n\
             ------------------------\n",
            emergency.id()
        );
        assert_eq!(emergency.to_string(), expected);
    }

    #[test]
    fn render_fire() {
        let emergency = Emergency::new(
            "Warehouse".to_string(),
            "smoke".to_string(),
            2,
            Kind::Fire {
                building_type: "Industrial".to_string(),
                severity: 4,
                hazardous_materials: false,
            },
        );
        let rendered = emergency.to_string();
        assert!(rendered.contains("Type: Fire Emergency\n"));
        assert!(rendered.contains("Building Type: Industrial\n"));
        assert!(rendered.contains("Severity (1-5): 4\n"));
        assert!(rendered.contains("Hazardous Materials: No\n"));
        assert!(rendered.ends_with("------------------------\n"));
    }

    #[test]
    fn render_police() {
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
        let rendered = emergency.to_string();
        assert!(rendered.contains("Type: Police Emergency\n"));
        assert!(rendered.contains("Crime Type: Robbery\n"));
        assert!(rendered.contains("Suspect Armed: Yes\n"));
        assert!(rendered.contains("Officers Needed: 3\n"));
    }
}
