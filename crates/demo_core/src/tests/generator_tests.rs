use rstest::rstest;
use shared::domain::ImageRef;

use super::{capitalize, NameFaker, UserGenerator};
use crate::vocabulary::{ANIMALS, COLORS};

fn split_animal_color(name: &str) -> Option<(&'static str, &'static str)> {
    ANIMALS.iter().find_map(|animal| {
        let prefix = capitalize(animal);
        let rest = name.strip_prefix(prefix.as_str())?;
        COLORS
            .iter()
            .find(|color| capitalize(color) == rest)
            .map(|color| (*animal, *color))
    })
}

#[rstest]
#[case("panda", "Panda")]
#[case("BLUE", "Blue")]
#[case("sNOW", "Snow")]
#[case("x", "X")]
#[case("", "")]
fn capitalizes_words(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(capitalize(input), expected);
}

#[test]
fn every_generated_name_is_animal_then_color() {
    let mut faker = NameFaker::seeded(7);
    let users = faker.generate_many(100);

    assert_eq!(users.len(), 100);
    for user in &users {
        assert!(
            split_animal_color(&user.name).is_some(),
            "unexpected name shape: {}",
            user.name
        );
        assert!(!user.name.contains(' '));
        assert_eq!(user.image, ImageRef::Placeholder);
    }
}

#[test]
fn same_seed_yields_same_users() {
    let first = NameFaker::seeded(42).generate_many(20);
    let second = NameFaker::seeded(42).generate_many(20);
    assert_eq!(first, second);
}

#[test]
fn different_seeds_diverge() {
    let first = NameFaker::seeded(1).generate_many(20);
    let second = NameFaker::seeded(2).generate_many(20);
    assert_ne!(first, second);
}

#[test]
fn entropy_seeded_faker_still_produces_valid_names() {
    let mut faker = NameFaker::from_seed_option(None);
    let user = faker.generate();
    assert!(split_animal_color(&user.name).is_some(), "{}", user.name);
}

#[test]
fn vocabularies_are_single_lowercase_words() {
    for word in ANIMALS.iter().chain(COLORS.iter()) {
        assert!(!word.is_empty());
        assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
    }
}
