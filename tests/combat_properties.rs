mod helpers;

use combat::{Combat, Combatant, Enemy, EnemyKind};
use hero::{Hero, HeroClass};
use proptest::prelude::*;

fn any_class() -> impl Strategy<Value = HeroClass> {
    prop_oneof![
        Just(HeroClass::Barbarian),
        Just(HeroClass::Mage),
        Just(HeroClass::Healer),
        Just(HeroClass::Assassin),
    ]
}

proptest! {
    #[test]
    fn displayed_health_never_goes_negative(
        class in any_class(),
        attack in 1u32..200,
        blows in 1u32..50,
    ) {
        let mut hero = Hero::new("Ben", class);
        let brute = Enemy::new("Brute", 100, attack, EnemyKind::Brigand);

        for _ in 0..blows {
            Combat::strike(&brute, &mut hero);
        }

        let taken = i64::from(attack) * i64::from(blows);
        let expected = (i64::from(class.base_hp()) - taken).max(0);
        prop_assert_eq!(i64::from(hero.displayed_hp()), expected);
        prop_assert_eq!(hero.is_alive(), expected > 0);
    }

    #[test]
    fn a_won_fight_always_reaches_the_goal(hp in 1i32..120, attack in 1u32..4) {
        // Spare "n" lines decline the special each round; once the fight is
        // over they are re-prompted away by the turn menu.
        let mut lines = vec!["1", "1"];
        lines.extend(std::iter::repeat_n("n", 30));
        lines.push("1");

        let mut game = helpers::TestGameBuilder::new(3)
            .with_encounter(2, helpers::group(vec![helpers::brigand("Rico", hp, attack)]))
            .build(&lines);

        prop_assert_eq!(game.run().ok(), Some(beat_them_all::Outcome::Victory));
        prop_assert!(game.hero().is_alive());
    }
}
