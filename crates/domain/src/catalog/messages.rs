//! Message patterns sent by contacts that involve missions.
//!
//! One pattern per invitation and one per step. Names of non-player contacts
//! are captured lazily with `(.+?)` because most of them contain spaces
//! ("Deep Space 4", "Anaan Science"). Positions that hold the player ship's
//! name are matched but never captured.
//!
//! Capture group conventions:
//! - step patterns: group 1 is the contact-name argument, if the step has one
//! - invitation patterns: see the `Invitation` rules in `definition.rs`

use regex_lite::Regex;
use std::sync::LazyLock;

// Courier: pick something up from one contact, deliver it to another.
// Group 1 = task contact name, group 2 = reward phrase.
pub static COURIER_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Help us help you\.\nFirst, (?:dock|rendezvous) with (.+?) and (?:pick up some supplies|download some data) we need\. Then, (?:dock|rendezvous) with us, and we'll (.*)\.$",
    )
    .expect("valid regex")
});
// Group 1 = name of the contact the cargo is for.
pub static COURIER_PICKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Transfer complete, .+?\. Please proceed to (.+?) to deliver the (?:data|supplies)\.$",
    )
    .expect("valid regex")
});
pub static COURIER_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Transfer complete, .+\.  Thanks for your help!$").expect("valid regex")
});

pub static DAMAGED_ENGINES_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Our engines are damaged and we can't move!  Could you spare a DamCon team to help us\?",
    )
    .expect("valid regex")
});
pub static DAMAGED_ENGINES_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Thanks for the team, .+?\.  We'll proceed to the station, and drop off your reward when we get there\.$",
    )
    .expect("valid regex")
});

// Appended to other greetings, so it is only anchored at the end.
pub static ENERGY_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" We also have energy to spare, if you need some\.$").expect("valid regex")
});
pub static ENERGY_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Here's the energy we promised you, .+?\.  Good luck!$").expect("valid regex")
});

pub static ENERGY_RANSOM_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"We are holding this ship hostage!  Bring us 900 energy, and no tricks, or we blow this ship into dust!!",
    )
    .expect("valid regex")
});
pub static ENERGY_RANSOM_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^This is the captain, the REAL captain\.  Those criminals left, using some sort of device, .+?\.  Thank you for your assistance\.  Let us upgrade your shield generators\.$",
    )
    .expect("valid regex")
});

pub static EXPLOSION_TRAP_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"We're just moving cargo between the stations in this sector\.  That's all\.  How are you\?",
    )
    .expect("valid regex")
});
pub static EXPLOSION_TRAP_SPRUNG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Ha ha!  You've fallen into the trap, .+?!").expect("valid regex")
});

pub static FIGHTER_TRAP_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"We're broken down!  Out of energy!  Yeah!  Could you come help us\?")
        .expect("valid regex")
});
pub static FIGHTER_TRAP_SPRUNG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Ha ha!  You've fallen into our trap, .+?!").expect("valid regex")
});

// Three spaces after "down!" is what the game sends.
pub static FLYING_BLIND_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Our sensors are all down!   We're flying blind\.  Please guide us to a station for repairs!",
    )
    .expect("valid regex")
});
pub static FLYING_BLIND_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Thanks for the assist!  We're repaired and ready to proceed on our own now\.  Enjoy your reward!",
    )
    .expect("valid regex")
});

pub static HIJACKERS_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"We have commandeered this ship!  Make no attempt to stop us\.  If we see you approach, we will blow this ship into dust!!",
    )
    .expect("valid regex")
});
pub static HIJACKERS_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^This is the captain, the REAL captain\.  We have the hijackers in custody now, .+?  Thank you for your assistance\.  Let us upgrade your shield generators\.$",
    )
    .expect("valid regex")
});

pub static JUMP_START_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"We're out of energy!  Could you lend us 100 units to get moving\?")
        .expect("valid regex")
});
pub static JUMP_START_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Thanks for the jump, .+?\.  We'll proceed to the station, and drop off your reward when we get there\.$",
    )
    .expect("valid regex")
});

pub static REBOOT_COMPUTER_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Our shipboard computer has gone haywire!  We can't reboot it!  Please help!$")
        .expect("valid regex")
});
pub static REBOOT_COMPUTER_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Our systems are rebooting!  Thanks!  We'll proceed to the station, and drop off your reward when we get there\.$",
    )
    .expect("valid regex")
});

// Group 1 = who needs collecting; decides the reward.
pub static SHUTTLE_RESCUE_INVITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"We're dead in space, our docking ports are destroyed, and (our ambassador|the big boss) needs to be (?:rescued|elsewhere)\.  Can you collect him in your shuttle\?",
    )
    .expect("valid regex")
});
pub static SHUTTLE_RESCUE_COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Thanks for (?:rescuing our ambassador|picking up the boss), .+  (?:As a good will gesture, here's a couple of nukes\.  Put 'em ta good use!  Ha ha ha!|Please, have these probes\.  Thanks again!)$",
    )
    .expect("valid regex")
});
