//! Interactive menu over a [`Menagerie`].
//!
//! Domain failures are shown to the user and the loop carries on. Only
//! terminal I/O errors and end of input leave the loop.

use std::io::{BufRead, Write};

use menagerie_domain::aggregates::creature::{
    MAX_HEALING_POINTS, MAX_OPPONENT_LEVEL, MAX_TRAINING_HOURS, MIN_HEALING_POINTS,
    MIN_OPPONENT_LEVEL, MIN_TRAINING_HOURS,
};
use menagerie_domain::{
    Age, Capacity, Creature, CreatureDraft, CreatureName, DiscoveryDate, DomainError,
    EvolveOutcome, HealthPoints, MagicPower, Menagerie, Species, TrainOutcome,
};

use crate::clock::ClockPort;
use crate::config::AppConfig;
use crate::prompt::{PromptError, PromptResult, Prompter};
use crate::table::render_creature_table;

const POSITIVE_INTEGER_ERROR: &str = "Invalid input! Please enter a positive integer.";

/// Run the whole session: banner, capacity setup, then the main menu.
///
/// Closing the input stream ends the session normally.
pub fn run<R, W, C>(input: R, output: W, clock: C, config: &AppConfig) -> PromptResult<()>
where
    R: BufRead,
    W: Write,
    C: ClockPort,
{
    let mut prompter = Prompter::new(input, output);
    let result = start(&mut prompter, config).and_then(|capacity| {
        App::new(prompter, clock, capacity).main_menu()
    });

    match result {
        Err(PromptError::EndOfInput) => {
            tracing::info!("Input closed, exiting");
            Ok(())
        }
        other => other,
    }
}

fn start<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &AppConfig,
) -> PromptResult<Capacity> {
    prompter.say("=== Magical Creatures Management System ===")?;
    prompter.say("Welcome to the World of Magic!\n")?;

    let capacity = match config.max_creatures {
        Some(capacity) => capacity,
        None => loop {
            let max = prompter.read_positive_integer(
                "Enter maximum number of creatures to manage (N > 0): ",
                POSITIVE_INTEGER_ERROR,
            )?;
            match Capacity::new(max) {
                Ok(capacity) => break capacity,
                Err(_) => prompter.say(POSITIVE_INTEGER_ERROR)?,
            }
        },
    };

    prompter.say(format!("Maximum creatures set to: {capacity}"))?;
    tracing::info!(max_creatures = capacity.get(), "Collection initialized");
    Ok(capacity)
}

pub struct App<R, W, C> {
    prompter: Prompter<R, W>,
    clock: C,
    menagerie: Menagerie,
}

impl<R: BufRead, W: Write, C: ClockPort> App<R, W, C> {
    pub fn new(prompter: Prompter<R, W>, clock: C, capacity: Capacity) -> Self {
        Self {
            prompter,
            clock,
            menagerie: Menagerie::new(capacity),
        }
    }

    pub fn main_menu(&mut self) -> PromptResult<()> {
        loop {
            self.prompter.say("\n=== MAIN MENU ===")?;
            self.prompter.say("1 - Add magical creature")?;
            self.prompter.say("2 - View all creatures")?;
            self.prompter.say("3 - Find creature")?;
            self.prompter.say("4 - Demonstrate magic abilities")?;
            self.prompter.say("5 - Delete creature")?;
            self.prompter.say("0 - Exit program")?;

            match self.prompter.read_string("Choose an option: ")?.as_str() {
                "1" => self.add_creature()?,
                "2" => self.view_all()?,
                "3" => self.find_creature()?,
                "4" => self.demonstrate_abilities()?,
                "5" => self.delete_creature()?,
                "0" => {
                    self.prompter.say("May the magic be with you! Goodbye!")?;
                    return Ok(());
                }
                _ => self.prompter.say("Invalid option! Choose from 0 to 5.")?,
            }
        }
    }

    // =========================================================================
    // Add
    // =========================================================================

    fn add_creature(&mut self) -> PromptResult<()> {
        if self.menagerie.is_full() {
            return self.prompter.say(format!(
                "Cannot add more creatures. Maximum limit ({}) reached.",
                self.menagerie.capacity()
            ));
        }

        self.prompter.say("\n=== ADD NEW MAGICAL CREATURE ===")?;
        let today = self.clock.today();
        let p = &mut self.prompter;

        let name = p.read_validated("Enter creature name: ", CreatureName::new)?;
        let species = p.read_validated("Enter species: ", Species::new)?;
        let age = p.read_integer_in_range("Enter age (years): ", Age::MIN, Age::MAX)?;
        let magic_power = p.read_float_in_range(
            &format!(
                "Enter magic power ({}-{}): ",
                MagicPower::MIN,
                MagicPower::MAX
            ),
            MagicPower::MIN,
            MagicPower::MAX,
        )?;
        let magic_type = p.read_magic_type("Enter magic type number: ")?;
        let can_fly = p.read_yes_no("Can fly? (y/n): ")?;
        let discovery_date = p.read_date_in_range(
            "Enter discovery date (dd.MM.yyyy): ",
            DiscoveryDate::earliest(),
            today,
        )?;
        let health_points = p.read_integer_in_range(
            &format!(
                "Enter health points ({}-{}): ",
                HealthPoints::MIN,
                HealthPoints::MAX
            ),
            HealthPoints::MIN,
            HealthPoints::MAX,
        )?;

        let draft = CreatureDraft {
            name: name.into(),
            species: species.into(),
            age,
            magic_power,
            magic_type,
            can_fly,
            discovery_date,
            health_points,
        };

        let added = Creature::create(draft, today).and_then(|creature| {
            let name = creature.name().to_string();
            self.menagerie.add(creature).map(|()| name)
        });

        match added {
            Ok(name) => {
                tracing::info!(name = %name, size = self.menagerie.len(), "Creature added");
                self.prompter
                    .say(format!("✨ {name} has been added to your collection! ✨"))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add creature");
                self.prompter.say(format!("Magic failed: {}", e.message()))
            }
        }
    }

    // =========================================================================
    // View / Find
    // =========================================================================

    fn view_all(&mut self) -> PromptResult<()> {
        if self.menagerie.is_empty() {
            return self.prompter.say("No magical creatures in your collection.");
        }
        self.prompter.say("\n=== YOUR MAGICAL COLLECTION ===")?;
        let table = render_creature_table(&self.menagerie.creatures().iter().collect::<Vec<_>>());
        self.prompter.say(table)
    }

    fn find_creature(&mut self) -> PromptResult<()> {
        if self.menagerie.is_empty() {
            return self.prompter.say("No creatures available for search.");
        }

        self.prompter.say("\n=== FIND MAGICAL CREATURE ===")?;
        self.prompter.say("Search by:")?;
        self.prompter.say("1 - Name")?;
        self.prompter.say("2 - Magic Type")?;
        self.prompter.say("3 - Species")?;
        self.prompter.say("4 - Flying creatures only")?;
        self.prompter.say("5 - Ancient creatures (1000+ years)")?;

        let choice = self.prompter.read_string("Choose search option: ")?;
        // Results borrow the collection, so the table is rendered before
        // anything else touches the prompter.
        let table = match choice.as_str() {
            "1" => {
                let query = self.prompter.read_string("Enter name to search: ")?;
                Self::results(self.menagerie.find_by_name(&query))
            }
            "2" => {
                let magic_type = self.prompter.read_magic_type("Enter magic type number: ")?;
                Self::results(self.menagerie.find_by_magic_type(magic_type))
            }
            "3" => {
                let query = self.prompter.read_string("Enter species to search: ")?;
                Self::results(self.menagerie.find_by_species(&query))
            }
            "4" => Self::results(self.menagerie.find_flying()),
            "5" => Self::results(self.menagerie.find_ancient()),
            _ => return self.prompter.say("Invalid option!"),
        };

        tracing::debug!(option = %choice, "Search completed");
        match table {
            Some((count, table)) => {
                self.prompter
                    .say(format!("\n🔮 Found {count} magical creature(s):"))?;
                self.prompter.say(table)
            }
            None => self.prompter.say("No magical creatures found."),
        }
    }

    fn results(found: Vec<&Creature>) -> Option<(usize, String)> {
        if found.is_empty() {
            None
        } else {
            Some((found.len(), render_creature_table(&found)))
        }
    }

    // =========================================================================
    // Demonstrate
    // =========================================================================

    fn demonstrate_abilities(&mut self) -> PromptResult<()> {
        if self.menagerie.is_empty() {
            return self.prompter.say("No creatures available for demonstration.");
        }

        self.prompter.say("\n=== DEMONSTRATE MAGIC ABILITIES ===")?;
        self.view_all()?;

        let count = i32::try_from(self.menagerie.len()).unwrap_or(i32::MAX);
        let number = self.prompter.read_integer_in_range(
            "Select creature number to demonstrate: ",
            1,
            count,
        )?;
        let position = usize::try_from(number).unwrap_or(0);
        let Some(name) = self.menagerie.get(position).map(|c| c.name().to_string()) else {
            return self.prompter.say("Invalid creature number!");
        };

        self.prompter.say(format!("\n✨ Magic abilities of {name} ✨"))?;
        self.prompter.say("1 - Calculate battle power")?;
        self.prompter.say("2 - Get creature info")?;
        self.prompter.say("3 - Check if ancient")?;
        self.prompter.say("4 - Train creature")?;
        self.prompter.say("5 - Heal creature")?;
        self.prompter.say("6 - Evolve creature")?;

        let choice = self.prompter.read_string("Choose action: ")?;
        let message = match choice.as_str() {
            "1" => {
                let level = self.prompter.read_integer_in_range(
                    &format!(
                        "Enter opponent level ({}-{}): ",
                        MIN_OPPONENT_LEVEL, MAX_OPPONENT_LEVEL
                    ),
                    MIN_OPPONENT_LEVEL,
                    MAX_OPPONENT_LEVEL,
                )?;
                self.with_creature(position, |c| {
                    c.battle_power(level)
                        .map(|power| format!("⚔️  Battle power: {power:.2}"))
                })
            }
            "2" => self.with_creature(position, |c| {
                Ok(format!("📜 Creature info: {}", c.info()))
            }),
            "3" => self.with_creature(position, |c| {
                Ok(format!("🏛️  Is ancient: {}", c.is_ancient()))
            }),
            "4" => {
                let hours = self.prompter.read_float_in_range(
                    &format!(
                        "Enter training hours ({}-{}): ",
                        MIN_TRAINING_HOURS, MAX_TRAINING_HOURS
                    ),
                    MIN_TRAINING_HOURS,
                    MAX_TRAINING_HOURS,
                )?;
                self.with_creature(position, |c| {
                    c.train(hours).map(|outcome| match outcome {
                        TrainOutcome::Trained { new_power, .. } => format!(
                            "{} trained for {} hours! Magic power increased to {:.2}",
                            c.name(),
                            hours,
                            new_power.value()
                        ),
                        TrainOutcome::AlreadyAtMax => {
                            format!("{} is already at maximum magic power!", c.name())
                        }
                    })
                })
            }
            "5" => {
                let points = self.prompter.read_integer_in_range(
                    &format!(
                        "Enter healing points ({}-{}): ",
                        MIN_HEALING_POINTS, MAX_HEALING_POINTS
                    ),
                    MIN_HEALING_POINTS,
                    MAX_HEALING_POINTS,
                )?;
                // Reports the requested points even when the ceiling caps them.
                self.with_creature(position, |c| {
                    c.heal(points).map(|outcome| {
                        tracing::debug!(?outcome, requested = points, "Heal applied");
                        format!(
                            "{} healed {} HP! Current HP: {}",
                            c.name(),
                            points,
                            c.health_points()
                        )
                    })
                })
            }
            "6" => self.with_creature(position, |c| {
                Ok(match c.evolve() {
                    EvolveOutcome::Evolved {
                        new_power, new_hp, ..
                    } => format!(
                        "{} evolved! New power: {:.2}, New HP: {}",
                        c.name(),
                        new_power.value(),
                        new_hp
                    ),
                    EvolveOutcome::TooYoung { .. } => {
                        format!("{} is too young to evolve!", c.name())
                    }
                })
            }),
            _ => return self.prompter.say("Invalid action!"),
        };

        match message {
            Ok(message) => {
                tracing::info!(name = %name, action = %choice, "Ability demonstrated");
                self.prompter.say(message)
            }
            Err(e) => self.prompter.say(format!("Magic failed: {}", e.message())),
        }
    }

    fn with_creature(
        &mut self,
        position: usize,
        action: impl FnOnce(&mut Creature) -> Result<String, DomainError>,
    ) -> Result<String, DomainError> {
        match self.menagerie.get_mut(position) {
            Some(creature) => action(creature),
            None => Err(DomainError::validation(
                "index",
                "Creature is no longer in the collection",
            )),
        }
    }

    // =========================================================================
    // Delete
    // =========================================================================

    fn delete_creature(&mut self) -> PromptResult<()> {
        if self.menagerie.is_empty() {
            return self.prompter.say("No creatures available to delete.");
        }

        self.prompter.say("\n=== DELETE MAGICAL CREATURE ===")?;
        self.prompter.say("Delete by:")?;
        self.prompter.say("1 - Number in list")?;
        self.prompter.say("2 - Name")?;
        self.prompter.say("3 - Species")?;

        let deleted = match self.prompter.read_string("Choose delete option: ")?.as_str() {
            "1" => {
                self.view_all()?;
                let count = i32::try_from(self.menagerie.len()).unwrap_or(i32::MAX);
                let number = self.prompter.read_integer_in_range(
                    "Enter creature number to delete: ",
                    1,
                    count,
                )?;
                match self
                    .menagerie
                    .delete_by_index(usize::try_from(number).unwrap_or(0))
                {
                    Ok(name) => {
                        self.prompter.say(format!(
                            "✨ {name} has returned to the magical realm! ✨"
                        ))?;
                        1
                    }
                    Err(e) => {
                        self.prompter.say(format!("Magic failed: {}", e.message()))?;
                        0
                    }
                }
            }
            "2" => {
                let name = self.prompter.read_string("Enter name to delete: ")?;
                let count = self.menagerie.delete_by_name(&name);
                self.prompter.say(format!(
                    "✨ {count} creature(s) named '{name}' returned to the magical realm! ✨"
                ))?;
                count
            }
            "3" => {
                let species = self.prompter.read_string("Enter species to delete: ")?;
                let count = self.menagerie.delete_by_species(&species);
                self.prompter.say(format!(
                    "✨ {count} {species} creature(s) returned to the magical realm! ✨"
                ))?;
                count
            }
            _ => return self.prompter.say("Invalid option!"),
        };

        tracing::info!(deleted, remaining = self.menagerie.len(), "Delete completed");
        if deleted == 0 {
            self.prompter.say("No creatures were deleted.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClockPort;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const ADD_SMAUG: &str = "1\nSmaug\nDragon\n1200\n500\n0\ny\n21.09.1937\n450\n";
    const ADD_PUFF: &str = "1\nPuff\nDragon\n50\n100\nair\nn\n01.01.2000\n500\n";

    fn config(max: usize) -> AppConfig {
        AppConfig {
            max_creatures: Some(Capacity::new(max).unwrap()),
        }
    }

    fn session(config: AppConfig, input: &str) -> String {
        let mut clock = MockClockPort::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let mut output = Vec::new();
        run(
            Cursor::new(input.as_bytes().to_vec()),
            &mut output,
            clock,
            &config,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    mod startup {
        use super::*;

        #[test]
        fn capacity_prompt_retries_until_positive() {
            let out = session(AppConfig::default(), "0\nabc\n2\n0\n");
            assert!(out.starts_with("=== Magical Creatures Management System ==="));
            assert!(out.contains("Welcome to the World of Magic!"));
            assert_eq!(
                out.matches("Invalid input! Please enter a positive integer.")
                    .count(),
                2
            );
            assert!(out.contains("Maximum creatures set to: 2"));
            assert!(out.ends_with("May the magic be with you! Goodbye!\n"));
        }

        #[test]
        fn preconfigured_capacity_skips_prompt() {
            let out = session(config(3), "0\n");
            assert!(!out.contains("Enter maximum number of creatures"));
            assert!(out.contains("Maximum creatures set to: 3"));
        }

        #[test]
        fn closed_input_ends_session_cleanly() {
            let out = session(AppConfig::default(), "");
            assert!(out.ends_with("Enter maximum number of creatures to manage (N > 0): "));

            let out = session(config(1), "2\n");
            assert!(out.contains("No magical creatures in your collection."));
        }

        #[test]
        fn unknown_menu_option_is_reported() {
            let out = session(config(1), "9\n0\n");
            assert!(out.contains("Invalid option! Choose from 0 to 5."));
        }
    }

    mod empty_collection {
        use super::*;

        #[test]
        fn every_action_reports_emptiness() {
            let out = session(config(1), "2\n3\n4\n5\n0\n");
            assert!(out.contains("No magical creatures in your collection."));
            assert!(out.contains("No creatures available for search."));
            assert!(out.contains("No creatures available for demonstration."));
            assert!(out.contains("No creatures available to delete."));
        }
    }

    mod add {
        use super::*;

        #[test]
        fn added_creature_shows_in_table() {
            let out = session(config(2), &format!("{ADD_SMAUG}2\n0\n"));
            assert!(out.contains("✨ Smaug has been added to your collection! ✨"));
            assert!(out.contains("=== YOUR MAGICAL COLLECTION ==="));
            assert!(out.contains("│ 1   │ Smaug │ Dragon  │ 1200 │ 500.0"));
            assert!(out.contains("│ 21.09.1937     │ 450 │"));
        }

        #[test]
        fn full_collection_refuses_before_prompting() {
            let out = session(config(1), &format!("{ADD_SMAUG}1\n0\n"));
            assert!(out.contains("Cannot add more creatures. Maximum limit (1) reached."));
            assert_eq!(out.matches("=== ADD NEW MAGICAL CREATURE ===").count(), 1);
        }

        #[test]
        fn invalid_fields_are_reprompted() {
            let input = "1\nX\nSmaug\nDr\nDragon\n6000\n1200\n0.5\n500\n7\nfire\nmaybe\ny\n\
                         01.01.2030\n21.09.1937\n0\n450\n0\n";
            let out = session(config(1), input);

            assert!(out.contains("Error: Name must be 2-25 characters long"));
            assert!(out.contains("Error: Species must be 3-30 characters long"));
            assert!(out.contains("Value must be between 0 and 5000."));
            assert!(out.contains("Value must be between 1 and 1000."));
            assert!(out.contains("Invalid magic type! Please enter a valid number."));
            assert!(out.contains("Please enter 'y' for yes or 'n' for no."));
            assert!(out.contains("Date must be between 01.01.1000 and 01.06.2024."));
            assert!(out.contains("Value must be between 1 and 500."));
            assert!(out.contains("✨ Smaug has been added to your collection! ✨"));
        }
    }

    mod find {
        use super::*;

        fn stocked(actions: &str) -> String {
            session(config(5), &format!("{ADD_SMAUG}{ADD_PUFF}{actions}0\n"))
        }

        #[test]
        fn name_without_match() {
            let out = stocked("3\n1\nzzz\n");
            assert!(out.contains("No magical creatures found."));
        }

        #[test]
        fn species_substring_finds_both() {
            let out = stocked("3\n3\ndrag\n");
            assert!(out.contains("🔮 Found 2 magical creature(s):"));
        }

        #[test]
        fn flying_and_ancient_filters() {
            let out = stocked("3\n4\n3\n5\n");
            assert_eq!(out.matches("🔮 Found 1 magical creature(s):").count(), 2);
        }

        #[test]
        fn magic_type_without_match() {
            let out = stocked("3\n2\ndark\n");
            assert!(out.contains("No magical creatures found."));
        }
    }

    mod demonstrate {
        use super::*;

        fn with_smaug(actions: &str) -> String {
            session(config(2), &format!("{ADD_SMAUG}{actions}0\n"))
        }

        #[test]
        fn battle_power_uses_bonuses() {
            let out = with_smaug("4\n1\n1\n10\n");
            assert!(out.contains("✨ Magic abilities of Smaug ✨"));
            assert!(out.contains("Battle power: 69.00"));
        }

        #[test]
        fn info_and_ancient() {
            let out = with_smaug("4\n1\n2\n4\n1\n3\n");
            assert!(out.contains("Creature info: Smaug the Dragon (Fire) - Power: "));
            assert!(out.contains("Is ancient: true"));
        }

        #[test]
        fn train_heal_evolve_in_sequence() {
            let out = with_smaug("4\n1\n4\n2\n4\n1\n5\n10\n4\n1\n6\n");
            assert!(out.contains("Smaug trained for 2 hours! Magic power increased to 505.00"));
            assert!(out.contains("Smaug healed 10 HP! Current HP: 460"));
            assert!(out.contains("Smaug evolved! New power: 656.50, New HP: 500"));
        }

        #[test]
        fn young_and_healthy_creature() {
            let out = session(config(2), &format!("{ADD_PUFF}4\n1\n6\n4\n1\n5\n20\n0\n"));
            assert!(out.contains("Puff is too young to evolve!"));
            assert!(out.contains("Puff healed 20 HP! Current HP: 500"));
        }

        #[test]
        fn capped_heal_reports_requested_points() {
            let out = with_smaug("4\n1\n5\n100\n");
            assert!(out.contains("Smaug healed 100 HP! Current HP: 500"));
        }

        #[test]
        fn selection_is_bounded_by_collection_size() {
            let out = with_smaug("4\n2\n1\n3\n");
            assert!(out.contains("Value must be between 1 and 1."));
            assert!(out.contains("Is ancient: true"));
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn by_name_species_and_number() {
            let input = format!(
                "{ADD_SMAUG}{ADD_PUFF}5\n2\nsmaug\n5\n3\nGolem\n5\n1\n1\n2\n0\n"
            );
            let out = session(config(5), &input);

            assert!(
                out.contains("✨ 1 creature(s) named 'smaug' returned to the magical realm! ✨")
            );
            assert!(out.contains("✨ 0 Golem creature(s) returned to the magical realm! ✨"));
            assert_eq!(out.matches("No creatures were deleted.").count(), 1);
            assert!(out.contains("✨ Puff has returned to the magical realm! ✨"));
            assert!(out.contains("No magical creatures in your collection."));
        }
    }
}
