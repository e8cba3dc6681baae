//! A single message-driven transition of a mission.

use regex_lite::Regex;

use crate::aggregates::Mission;
use crate::value_objects::{ContactRole, MissionState};
use crate::ContactId;

/// One step a mission must pass through.
///
/// A step is satisfied by a message from the contact bound to `sender` whose
/// text matches `pattern`. Steps with an `argument` additionally require
/// capture group 1 to equal the current name of the contact bound to that
/// role; this tells apart concurrent missions of the same type that share a
/// sender.
#[derive(Debug, Clone)]
pub struct Step {
    sender: ContactRole,
    pattern: Regex,
    argument: Option<ContactRole>,
}

impl Step {
    pub fn new(sender: ContactRole, pattern: &Regex) -> Self {
        Self {
            sender,
            pattern: pattern.clone(),
            argument: None,
        }
    }

    /// Require capture group 1 of the pattern to name the contact bound to `role`.
    pub fn with_argument(mut self, role: ContactRole) -> Self {
        self.argument = Some(role);
        self
    }

    /// Role whose contact must send the completing message
    pub fn sender(&self) -> ContactRole {
        self.sender
    }

    pub fn argument(&self) -> Option<ContactRole> {
        self.argument
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Returns true if the message satisfies this step for the given mission.
    ///
    /// `name_of` resolves a contact's current display name. An argument
    /// contact with no known name never matches.
    pub fn matches(
        &self,
        mission: &Mission,
        sender: ContactId,
        body: &str,
        name_of: &dyn Fn(ContactId) -> Option<String>,
    ) -> bool {
        if mission.state() != MissionState::Pending {
            return false;
        }

        if mission.contact(self.sender) != Some(sender) {
            return false;
        }

        let Some(captures) = self.pattern.captures(body) else {
            return false;
        };

        if let Some(role) = self.argument {
            let expected = mission.contact(role).and_then(name_of);
            let captured = captures.get(1).map(|m| m.as_str());

            // Names a different contact than the one this mission is waiting on
            match (expected.as_deref(), captured) {
                (Some(expected), Some(captured)) if expected == captured => {}
                _ => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::messages::{COURIER_COMPLETE, COURIER_PICKUP};
    use crate::catalog::{MissionCatalog, MissionType};
    use crate::value_objects::Contact;

    const PICKUP: &str =
        "Transfer complete, Captain. Please proceed to Anaan Science to deliver the supplies.";

    fn courier() -> Mission {
        let sender = Contact::new(1, "Anaan Science");
        let invitation = "Help us help you.\nFirst, dock with Deep Space 4 and pick up some supplies we need. Then, dock with us, and we'll give you two more nuclear torpedoes.";
        MissionCatalog::builtin()
            .extract_kind(MissionType::Courier, &sender, invitation, |name| {
                (name == "Deep Space 4").then(|| Contact::new(2, name))
            })
            .and_then(Result::ok)
            .unwrap()
    }

    fn names(id: ContactId) -> Option<String> {
        match id.get() {
            1 => Some("Anaan Science".to_string()),
            2 => Some("Deep Space 4".to_string()),
            _ => None,
        }
    }

    #[test]
    fn matches_expected_sender_and_text() {
        let step = Step::new(ContactRole::Task, &COURIER_PICKUP).with_argument(ContactRole::Reward);
        assert!(step.matches(&courier(), ContactId::new(2), PICKUP, &names));
    }

    #[test]
    fn rejects_wrong_sender() {
        let step = Step::new(ContactRole::Task, &COURIER_PICKUP).with_argument(ContactRole::Reward);
        assert!(!step.matches(&courier(), ContactId::new(1), PICKUP, &names));
        assert!(!step.matches(&courier(), ContactId::new(99), PICKUP, &names));
    }

    #[test]
    fn rejects_non_matching_text() {
        let step = Step::new(ContactRole::Task, &COURIER_PICKUP);
        let body = "Transfer complete, Captain.  Thanks for your help!";
        assert!(!step.matches(&courier(), ContactId::new(2), body, &names));
    }

    #[test]
    fn rejects_argument_naming_another_contact() {
        let step = Step::new(ContactRole::Task, &COURIER_PICKUP).with_argument(ContactRole::Reward);
        let body = "Transfer complete, Captain. Please proceed to Deep Space 9 to deliver the supplies.";
        assert!(!step.matches(&courier(), ContactId::new(2), body, &names));
    }

    #[test]
    fn rejects_argument_when_contact_name_is_unknown() {
        let step = Step::new(ContactRole::Task, &COURIER_PICKUP).with_argument(ContactRole::Reward);
        assert!(!step.matches(&courier(), ContactId::new(2), PICKUP, &|_| None));
    }

    #[test]
    fn rejects_argument_role_that_is_unbound() {
        // EnergyOffer missions have no task contact
        let step = Step::new(ContactRole::Reward, &COURIER_PICKUP).with_argument(ContactRole::Task);
        let sender = Contact::new(1, "Anaan Science");
        let mission = MissionCatalog::builtin()
            .extract_kind(
                MissionType::EnergyOffer,
                &sender,
                "Hello there. We also have energy to spare, if you need some.",
                |_| None,
            )
            .and_then(Result::ok)
            .unwrap();
        assert!(!step.matches(&mission, ContactId::new(1), PICKUP, &names));
    }

    #[test]
    fn step_without_argument_ignores_captures() {
        let step = Step::new(ContactRole::Reward, &COURIER_COMPLETE);
        let body = "Transfer complete, Captain.  Thanks for your help!";
        assert!(step.matches(&courier(), ContactId::new(1), body, &|_| None));
    }
}
