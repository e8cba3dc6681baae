//! Mission archetype definitions.
//!
//! Each archetype is plain data: an invitation rule saying how to recognise a
//! new mission and populate it, an ordered list of steps, and two flags. The
//! built-in table at the bottom of this file is the whole game vocabulary.

use std::sync::Arc;

use regex_lite::{Captures, Regex};

use super::messages as msg;
use super::{MissionType, Step};
use crate::aggregates::Mission;
use crate::error::ExtractionError;
use crate::value_objects::{CompletionOutcome, Contact, ContactRole, Reward, RewardDelivery};

/// Where the reward contact of a new mission comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardContact {
    /// The mission has no reward contact
    None,
    /// The sender of the invitation hands over the reward
    Sender,
    /// The contact named by this capture group hands over the reward
    Captured(usize),
}

/// How the reward of a new mission is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardRule {
    Fixed(Reward),
    /// Capture group holding a reward phrase; unknown phrases give `Reward::Unknown`
    Token(usize),
    /// Capture group looked up in `table`, with `fallback` for anything else
    Keyed {
        group: usize,
        table: &'static [(&'static str, Reward)],
        fallback: Reward,
    },
}

/// How to recognise an unsolicited invitation and build a mission from it.
#[derive(Debug, Clone)]
pub struct Invitation {
    pattern: Regex,
    task: Option<usize>,
    reward_contact: RewardContact,
    reward: RewardRule,
}

impl Invitation {
    pub fn new(pattern: &Regex, reward: RewardRule) -> Self {
        Self {
            pattern: pattern.clone(),
            task: None,
            reward_contact: RewardContact::None,
            reward,
        }
    }

    /// The task contact is named by this capture group.
    pub fn task_from(mut self, group: usize) -> Self {
        self.task = Some(group);
        self
    }

    pub fn reward_contact(mut self, reward_contact: RewardContact) -> Self {
        self.reward_contact = reward_contact;
        self
    }

    /// Roles a mission built from this invitation will have bound.
    pub fn binds(&self, role: ContactRole) -> bool {
        match role {
            ContactRole::Giver => true,
            ContactRole::Task => self.task.is_some(),
            ContactRole::Reward => self.reward_contact != RewardContact::None,
        }
    }

    fn reward(&self, captures: &Captures<'_>) -> Reward {
        let group = |index: usize| captures.get(index).map(|m| m.as_str()).unwrap_or_default();

        match self.reward {
            RewardRule::Fixed(reward) => reward,
            RewardRule::Token(index) => Reward::from_token(group(index)).unwrap_or(Reward::Unknown),
            RewardRule::Keyed {
                group: index,
                table,
                fallback,
            } => {
                let key = group(index);
                table
                    .iter()
                    .find(|(candidate, _)| *candidate == key)
                    .map(|(_, reward)| *reward)
                    .unwrap_or(fallback)
            }
        }
    }
}

/// An immutable mission archetype
#[derive(Debug, Clone)]
pub struct MissionTypeDef {
    kind: MissionType,
    invitation: Invitation,
    steps: Vec<Step>,
    delivery: RewardDelivery,
    completion: CompletionOutcome,
}

impl MissionTypeDef {
    pub fn new(kind: MissionType, invitation: Invitation, steps: Vec<Step>) -> Self {
        Self {
            kind,
            invitation,
            steps,
            delivery: RewardDelivery::Immediate,
            completion: CompletionOutcome::Success,
        }
    }

    /// The giver drops the reward off at the next station it docks with.
    pub fn delivered_at_station(mut self) -> Self {
        self.delivery = RewardDelivery::AtStation;
        self
    }

    /// Running out of steps is a failure (traps).
    pub fn fails_on_completion(mut self) -> Self {
        self.completion = CompletionOutcome::Failure;
        self
    }

    pub fn kind(&self) -> MissionType {
        self.kind
    }

    pub fn invitation(&self) -> &Invitation {
        &self.invitation
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn delivery(&self) -> RewardDelivery {
        self.delivery
    }

    pub fn completion(&self) -> CompletionOutcome {
        self.completion
    }
}

/// Tests one archetype's invitation against a message.
///
/// Returns `None` when the message is not an invitation of this type. The
/// giver is always the sender; a captured task name is resolved through
/// `resolve`, and failing to resolve it fails this candidate only.
pub(crate) fn extract<F>(
    def: &Arc<MissionTypeDef>,
    sender: &Contact,
    body: &str,
    resolve: F,
) -> Option<Result<Mission, ExtractionError>>
where
    F: Fn(&str) -> Option<Contact>,
{
    let invitation = &def.invitation;
    let captures = invitation.pattern.captures(body)?;
    let mut mission = Mission::new(Arc::clone(def), sender.id, invitation.reward(&captures));

    let lookup = |group: usize| {
        let name = captures.get(group).map(|m| m.as_str()).unwrap_or_default();
        resolve(name)
            .map(|contact| contact.id)
            .ok_or_else(|| ExtractionError::unresolved(def.kind, name))
    };

    if let Some(group) = invitation.task {
        match lookup(group) {
            Ok(id) => mission.bind(ContactRole::Task, id),
            Err(err) => return Some(Err(err)),
        }
    }

    match invitation.reward_contact {
        RewardContact::None => {}
        RewardContact::Sender => mission.bind(ContactRole::Reward, sender.id),
        RewardContact::Captured(group) => match lookup(group) {
            Ok(id) => mission.bind(ContactRole::Reward, id),
            Err(err) => return Some(Err(err)),
        },
    }

    Some(Ok(mission))
}

const SHUTTLE_PASSENGERS: &[(&str, Reward)] = &[("our ambassador", Reward::Probes)];

/// The game's side-mission archetypes, in catalog order.
pub(crate) fn builtin_definitions() -> Vec<MissionTypeDef> {
    use ContactRole::{Giver, Reward as RewardRole, Task};

    vec![
        MissionTypeDef::new(
            MissionType::Courier,
            Invitation::new(&msg::COURIER_INVITATION, RewardRule::Token(2))
                .task_from(1)
                .reward_contact(RewardContact::Sender),
            vec![
                Step::new(Task, &msg::COURIER_PICKUP).with_argument(RewardRole),
                Step::new(RewardRole, &msg::COURIER_COMPLETE),
            ],
        ),
        MissionTypeDef::new(
            MissionType::DamagedEngines,
            Invitation::new(&msg::DAMAGED_ENGINES_INVITATION, RewardRule::Fixed(Reward::Nukes)),
            vec![Step::new(Giver, &msg::DAMAGED_ENGINES_COMPLETE)],
        )
        .delivered_at_station(),
        MissionTypeDef::new(
            MissionType::EnergyOffer,
            Invitation::new(&msg::ENERGY_INVITATION, RewardRule::Fixed(Reward::Energy))
                .reward_contact(RewardContact::Sender),
            vec![Step::new(RewardRole, &msg::ENERGY_COMPLETE)],
        ),
        MissionTypeDef::new(
            MissionType::EnergyRansom,
            Invitation::new(
                &msg::ENERGY_RANSOM_INVITATION,
                RewardRule::Fixed(Reward::EnhanceShields),
            ),
            vec![Step::new(Giver, &msg::ENERGY_RANSOM_COMPLETE)],
        ),
        MissionTypeDef::new(
            MissionType::ExplosionTrap,
            Invitation::new(&msg::EXPLOSION_TRAP_INVITATION, RewardRule::Fixed(Reward::None)),
            vec![Step::new(Giver, &msg::EXPLOSION_TRAP_SPRUNG)],
        )
        .fails_on_completion(),
        MissionTypeDef::new(
            MissionType::FighterTrap,
            Invitation::new(&msg::FIGHTER_TRAP_INVITATION, RewardRule::Fixed(Reward::None)),
            vec![Step::new(Giver, &msg::FIGHTER_TRAP_SPRUNG)],
        )
        .fails_on_completion(),
        MissionTypeDef::new(
            MissionType::FlyingBlind,
            Invitation::new(&msg::FLYING_BLIND_INVITATION, RewardRule::Fixed(Reward::Unknown)),
            vec![Step::new(Giver, &msg::FLYING_BLIND_COMPLETE)],
        )
        .delivered_at_station(),
        MissionTypeDef::new(
            MissionType::Hijackers,
            Invitation::new(
                &msg::HIJACKERS_INVITATION,
                RewardRule::Fixed(Reward::EnhanceShields),
            ),
            vec![Step::new(Giver, &msg::HIJACKERS_COMPLETE)],
        ),
        MissionTypeDef::new(
            MissionType::JumpStart,
            Invitation::new(&msg::JUMP_START_INVITATION, RewardRule::Fixed(Reward::Unknown)),
            vec![Step::new(Giver, &msg::JUMP_START_COMPLETE)],
        )
        .delivered_at_station(),
        MissionTypeDef::new(
            MissionType::RebootComputer,
            Invitation::new(
                &msg::REBOOT_COMPUTER_INVITATION,
                RewardRule::Fixed(Reward::Unknown),
            ),
            vec![Step::new(Giver, &msg::REBOOT_COMPUTER_COMPLETE)],
        )
        .delivered_at_station(),
        MissionTypeDef::new(
            MissionType::ShuttleRescue,
            Invitation::new(
                &msg::SHUTTLE_RESCUE_INVITATION,
                RewardRule::Keyed {
                    group: 1,
                    table: SHUTTLE_PASSENGERS,
                    fallback: Reward::Nukes,
                },
            )
            .reward_contact(RewardContact::Sender),
            vec![Step::new(RewardRole, &msg::SHUTTLE_RESCUE_COMPLETE)],
        ),
    ]
}
