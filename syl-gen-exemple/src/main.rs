use rand::SeedableRng;
use rand::rngs::StdRng;

use syl_gen_core::{Category, Gender, GenerationRequest, Generator, count_syllables, to_demonym};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Build a generator over the builtin fragment tables
    // Use 'Generator::from_file("fragments.toml")' to load custom fragments instead
    let app = Generator::new()?;

    // A request starts from defaults: one word of two syllables, no hyphen, no demonym
    let mut input = GenerationRequest::new(Category::Place);

    // One target per word; missing targets repeat the last one ([2, 3, 3] here)
    input.syllables = vec![2, 3];
    input.word_count = 3;

    // Place suffix groups: natural and artificial are on by default, continent is off
    input.options.include_natural = false;
    input.options.include_continent = true;

    // Insert a preposition between two words ("Kelmar of Dravon")
    input.options.include_prepositions = true;

    for i in 0..5 {
        println!("Place {}: {}", i + 1, app.generate(&input));
    }

    // Hyphenated demonyms
    input.word_count = 2;
    input.hyphenated = true;
    input.demonym = true;
    input.options.include_prepositions = false;
    for i in 0..5 {
        println!("Demonym {}: {}", i + 1, app.generate(&input));
    }

    // Person names pick their suffixes from the chosen gender
    let mut person = GenerationRequest::new(Category::Person);
    person.syllables = vec![3];
    for gender in [Gender::Masculine, Gender::Feminine, Gender::Neutral, Gender::Any] {
        person.options.gender = gender;
        println!("{:?}: {}", gender, app.generate_batch(&person, 4).join(", "));
    }

    // Demonyms are ignored for creatures (only places have inhabitants)
    let mut creature = GenerationRequest::new(Category::Creature);
    creature.demonym = true;
    println!("Creatures: {}", app.generate_batch(&creature, 6).join(", "));

    // A seeded random source makes generation reproducible
    let everything = GenerationRequest::new(Category::All);
    let first = app.generate_with(&everything, &mut StdRng::seed_from_u64(2024));
    let second = app.generate_with(&everything, &mut StdRng::seed_from_u64(2024));
    println!("Seeded: {} == {}", first, second);

    // The building blocks are available on their own
    for word in ["Narnia", "Chile", "Italy", "Brazil"] {
        println!("{} ({} syllables) -> {}", word, count_syllables(word), to_demonym(word));
    }

    Ok(())
}
