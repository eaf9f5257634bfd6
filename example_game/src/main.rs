//! Example Game - A scripted skirmish demonstrating combat_core
//!
//! Builds two characters from the bundled modifier templates, then runs a
//! seeded turn exchange until one side drops. Pass a number to reseed:
//!
//! ```text
//! cargo run -p example_game -- 1234
//! ```

use combat_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::process::ExitCode;

const MAX_ROUNDS: u32 = 50;

fn print_sheet(character: &Character) {
    println!("{} - {}", character.name, character.description);
    println!(
        "  health {:.0}/{:.0} (regen {:.2})  evasion {:.2}  psi {:.0}/{:.0} (regen {:.2})",
        character.health,
        character.max_health,
        character.health_regen,
        character.evasion,
        character.psi,
        character.max_psi,
        character.psi_regen,
    );
    for attr in Attribute::all() {
        println!("  {:<13} {:>6.1}", attr.to_string(), character.effective(*attr));
    }
    println!("  modifiers: {}", character.modifiers.join(", "));
}

fn setup_roster() -> Result<Roster, EngineError> {
    let mut roster = Roster::with_library(default_modifiers());

    roster.insert(Character::new(
        "Korr",
        "A scarred line soldier",
        AttributeSet {
            strength: 70.0,
            dexterity: 60.0,
            constitution: 100.0,
            intelligence: 40.0,
            wisdom: 50.0,
            charisma: 50.0,
        },
    ));
    roster.insert(Character::new(
        "Mira",
        "A quiet psion",
        AttributeSet {
            strength: 30.0,
            dexterity: 70.0,
            constitution: 80.0,
            intelligence: 90.0,
            wisdom: 60.0,
            charisma: 55.0,
        },
    ));

    roster.learn_modifier("Korr", "Soldier's Conditioning")?;
    roster.learn_modifier("Korr", "Street Fighting")?;
    roster.learn_modifier("Mira", "Psionic Attunement")?;
    Ok(roster)
}

/// First action unlocked by a character's learned modifiers
fn first_action(roster: &Roster, name: &str) -> Option<Action> {
    roster
        .get(name)?
        .modifiers
        .iter()
        .filter_map(|modifier| roster.library().get(modifier))
        .flat_map(|modifier| modifier.actions.iter())
        .next()
        .cloned()
}

fn run(seed: u64) -> Result<(), EngineError> {
    let mut roster = setup_roster()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("=== Skirmish (seed {seed}) ===\n");
    print_sheet(roster.get("Korr").expect("inserted above"));
    println!();
    print_sheet(roster.get("Mira").expect("inserted above"));
    println!();

    let korr_action = first_action(&roster, "Korr").expect("Korr learned an action");
    let mira_action = first_action(&roster, "Mira").expect("Mira learned an action");

    for round in 1..=MAX_ROUNDS {
        println!("-- round {round} --");
        for (attacker, defender, action) in [
            ("Korr", "Mira", &korr_action),
            ("Mira", "Korr", &mira_action),
        ] {
            if !roster.get(attacker).is_some_and(|c| c.is_alive()) {
                continue;
            }
            let outcome = roster.perform_action(attacker, defender, action, &mut rng)?;
            println!("  {}", outcome.narrative);
            if outcome.is_killing_blow {
                println!("\n{defender} falls. {attacker} wins in round {round}.");
                println!("\nfinal state: {}", roster.health_report_json().unwrap_or_default());
                return Ok(());
            }
        }
    }

    println!("\nBoth combatants are still standing after {MAX_ROUNDS} rounds.");
    println!("\nfinal state: {}", roster.health_report_json().unwrap_or_default());
    Ok(())
}

fn main() -> ExitCode {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    match run(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
