mod helpers;

use beat_them_all::{Game, GameConfig, Outcome};
use combat::{Combatant, Enemy, EnemyKind};
use error::GameError;
use helpers::*;
use hero::HeroClass;
use pretty_assertions::assert_eq;
use trivia::QuestionBank;

#[test]
fn walk_to_the_goal_without_fights() {
    let mut game = TestGameBuilder::new(3).build(&["1", "1"]);

    assert_eq!(game.play_turn().unwrap(), None);
    assert_eq!(game.hero().position, 2);
    assert_eq!(game.map().render(), "[START]_[Ben]_[END]");

    assert_eq!(game.play_turn().unwrap(), Some(Outcome::Victory));
    assert_eq!(game.hero().position, game.map().finish() - 1);
    assert!(game.finish_message().contains("VICTORY"));
}

#[test]
fn winning_a_fight_clears_the_cell_and_advances() {
    let mut game = TestGameBuilder::new(4)
        .with_encounter(2, group(vec![brigand("Rico", 5, 1)]))
        .build(&["1", "1", "n", "1", "1"]);

    assert_eq!(game.run().unwrap(), Outcome::Victory);
    assert_eq!(game.map().encounter_count(), 0);
    assert_eq!(game.hero().hp, 100);

    let out = transcript(game.into_console());
    assert!(out.contains("A group of enemies blocks the way!"));
    assert!(out.contains("Ben deals 5 damage."));
    assert!(out.contains("Rico died after 1 rounds."));
    assert!(out.contains("[START]_[Ben]__[END]"));
    assert!(out.contains("Thanks for playing!"));
}

#[test]
fn special_ability_wipes_the_group() {
    let enemies = vec![
        brigand("Rico", 90, 2),
        brigand("Sam", 90, 2),
        brigand("Lou", 90, 2),
    ];
    let mut game = TestGameBuilder::new(4)
        .with_class(HeroClass::Assassin)
        .with_encounter(2, group(enemies))
        .build(&["1", "1", "y"]);

    assert_eq!(game.play_turn().unwrap(), None);
    assert!(game.hero().special_used);
    assert_eq!(game.hero().hp, 150);
    assert_eq!(game.hero().position, 2);
    assert!(!game.map().has_encounter(2));
}

#[test]
fn correct_trivia_answer_multiplies_damage() {
    let bank = QuestionBank::from_reader("2 + 2?|3|4|5|6|4\n".as_bytes());
    assert_eq!(bank.len(), 1);

    // Rico outlasts twenty plain blows, so the quiz coin comes up during the fight
    let mut game = TestGameBuilder::new(4)
        .with_special_spent()
        .with_questions(bank)
        .with_encounter(2, group(vec![brigand("Rico", 100, 1)]))
        .build(&["1", "1", "2", "1", "1"]);

    assert_eq!(game.run().unwrap(), Outcome::Victory);
    assert!(game.questions().is_empty());

    let out = transcript(game.into_console());
    assert!(out.contains("^^ 2 + 2? ^^"));
    assert!(out.contains("CORRECT ANSWER"));
    assert!(out.contains("Ben deals 25 damage."));
    assert!(!out.contains("special ability"));
}

#[test]
fn fleeing_is_a_defeat() {
    let mut game = TestGameBuilder::new(4)
        .with_encounter(2, group(vec![brigand("Rico", 60, 2)]))
        .build(&["1", "2"]);

    assert_eq!(game.run().unwrap(), Outcome::Defeat);
    assert_eq!(game.hero().hp, 0);
    assert_eq!(game.hero().position, 1);
    assert!(game.map().has_encounter(2));
    assert!(game.finish_message().contains("DEFEAT"));
}

#[test]
fn quitting_is_a_defeat() {
    let mut game = TestGameBuilder::new(4).build(&["2"]);

    assert_eq!(game.play_turn().unwrap(), Some(Outcome::Defeat));
    assert!(!game.hero().is_alive());
    // the result sticks without reading more input
    assert_eq!(game.play_turn().unwrap(), Some(Outcome::Defeat));
}

#[test]
fn dying_in_a_fight_ends_the_game() {
    let gangster = Enemy::new("Vito", 100, 2, EnemyKind::Gangster);
    let mut game = TestGameBuilder::new(4)
        .with_hero_hp(1)
        .with_encounter(2, group(vec![gangster]))
        .build(&["1", "1"]);

    assert_eq!(game.play_turn().unwrap(), Some(Outcome::Defeat));
    assert_eq!(game.hero().displayed_hp(), 0);
    assert_eq!(game.hero().position, 1);
    assert!(game.map().has_encounter(2));
}

#[test]
fn invalid_menu_answers_are_asked_again() {
    let mut game = TestGameBuilder::new(3).build(&["forward", "0", "3", "1"]);

    assert_eq!(game.play_turn().unwrap(), None);
    assert_eq!(game.hero().position, 2);

    let out = transcript(game.into_console());
    assert_eq!(out.matches("Invalid input. Please enter a number.").count(), 1);
    assert_eq!(
        out.matches("Invalid choice. Please enter a number between 1 and 2.")
            .count(),
        2
    );
}

#[test]
fn closed_input_stops_the_game() {
    let mut game = TestGameBuilder::new(5).build(&["1"]);

    assert_eq!(game.play_turn().unwrap(), None);
    assert!(matches!(game.run(), Err(GameError::InputClosed)));
}

#[test]
fn seeded_setup_builds_a_populated_map() {
    let config = GameConfig {
        seed: Some(SEED),
        ..GameConfig::instant()
    };
    let game = Game::setup(config, QuestionBank::default(), console(&["Ben", "2", "1"])).unwrap();

    let hero = game.hero();
    assert_eq!(hero.class, HeroClass::Mage);
    assert_eq!(hero.hp, 250);
    assert_eq!(hero.position, 1);

    let map = game.map();
    assert!((7..12).contains(&map.len()), "easy map of {} cells", map.len());
    assert!(map.encounter_count() >= 1);
    assert!(!map.has_encounter(1));
    assert!(!map.has_encounter(map.finish() - 1));
    assert_eq!(game.outcome(), None);

    let out = transcript(game.into_console());
    assert!(out.contains("Pick your hero:"));
    assert!(out.contains("Ben the Mage is ready."));
    assert!(out.contains("[START][Ben]"));
}

#[test]
fn same_seed_same_map() {
    let config = GameConfig {
        seed: Some(42),
        ..GameConfig::instant()
    };
    let first = Game::setup(
        config.clone(),
        QuestionBank::default(),
        console(&["A", "1", "3"]),
    )
    .unwrap();
    let second = Game::setup(config, QuestionBank::default(), console(&["A", "1", "3"])).unwrap();

    assert_eq!(first.map().render(), second.map().render());
    assert_eq!(first.map().name(), second.map().name());
}

#[test]
fn blank_name_gets_a_default() {
    let game = Game::setup(
        GameConfig::instant(),
        QuestionBank::default(),
        console(&["", "1", "1"]),
    )
    .unwrap();
    assert_eq!(game.hero().name, "Hero");
}
