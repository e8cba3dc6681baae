//! Mission Type Catalog
//!
//! The fixed table of mission archetypes, and invitation extraction over it.
//! Archetypes are tested in a deterministic order; nothing here assumes that
//! only one of them can match a given message.

mod definition;
pub mod messages;
mod mission_type;
mod step;

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

pub use definition::{Invitation, MissionTypeDef, RewardContact, RewardRule};
pub use mission_type::{MissionCategory, MissionType};
pub use step::Step;

use crate::aggregates::Mission;
use crate::error::{CatalogError, ExtractionError};
use crate::value_objects::Contact;

static BUILTIN: LazyLock<MissionCatalog> = LazyLock::new(|| {
    MissionCatalog::new(definition::builtin_definitions())
        .unwrap_or_else(|err| panic!("built-in mission catalog is invalid: {err}"))
});

/// Result of testing one archetype's invitation against a message
pub type Extraction = Result<Mission, ExtractionError>;

/// A validated, ordered set of mission archetypes
#[derive(Debug, Clone)]
pub struct MissionCatalog {
    defs: Vec<Arc<MissionTypeDef>>,
}

impl MissionCatalog {
    /// Builds a catalog, rejecting structurally broken archetypes.
    pub fn new(defs: Vec<MissionTypeDef>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for def in &defs {
            if !seen.insert(def.kind()) {
                return Err(CatalogError::DuplicateType(def.kind()));
            }

            if def.steps().is_empty() {
                return Err(CatalogError::NoSteps(def.kind()));
            }

            for (index, step) in def.steps().iter().enumerate() {
                let roles = std::iter::once(step.sender()).chain(step.argument());

                for role in roles {
                    if !def.invitation().binds(role) {
                        return Err(CatalogError::UnboundRole {
                            mission_type: def.kind(),
                            step: index,
                            role,
                        });
                    }
                }
            }
        }

        Ok(Self {
            defs: defs.into_iter().map(Arc::new).collect(),
        })
    }

    /// The game's built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in table is structurally invalid.
    pub fn builtin() -> &'static MissionCatalog {
        &BUILTIN
    }

    pub fn get(&self, kind: MissionType) -> Option<&MissionTypeDef> {
        self.defs.iter().find(|def| def.kind() == kind).map(Arc::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MissionTypeDef> {
        self.defs.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Tests every archetype's invitation against a message from `sender`.
    ///
    /// Returns one entry per archetype whose invitation matched, in catalog
    /// order. Candidates whose captured contact cannot be resolved come back
    /// as errors without affecting the others.
    pub fn extract<F>(&self, sender: &Contact, body: &str, resolve: F) -> Vec<Extraction>
    where
        F: Fn(&str) -> Option<Contact>,
    {
        self.defs
            .iter()
            .filter_map(|def| definition::extract(def, sender, body, &resolve))
            .collect()
    }

    /// Tests a single archetype's invitation.
    pub fn extract_kind<F>(
        &self,
        kind: MissionType,
        sender: &Contact,
        body: &str,
        resolve: F,
    ) -> Option<Extraction>
    where
        F: Fn(&str) -> Option<Contact>,
    {
        let def = self.defs.iter().find(|def| def.kind() == kind)?;
        definition::extract(def, sender, body, resolve)
    }
}
