//! One-time class specials.

use combat::{CombatResult, Combatant, Enemy};
use tracing::info;

use crate::class::HeroClass;
use crate::core::Hero;

/// Barbarian rage multiplies the attack power by this much
pub const BARBARIAN_RAGE_MULTIPLIER: u32 = 20;
/// Flat damage of the mage's bolt
pub const MAGE_BOLT_DAMAGE: u32 = 15;

impl Hero {
    /// Apply the class special to `foes`. The caller is responsible for the
    /// once-per-game bookkeeping.
    pub(crate) fn unleash_special(&mut self, foes: &mut Vec<Enemy>) -> CombatResult {
        let mut result = CombatResult::new();
        info!("{} unleashes the {} special", self.name, self.class);

        match self.class {
            HeroClass::Barbarian => {
                if let Some(front) = foes.first_mut() {
                    let damage = self.attack.saturating_mul(BARBARIAN_RAGE_MULTIPLIER);
                    front.take_damage(damage);
                    result.log(format!(
                        "🔥🔥 : {} flies into a rage and multiplies the damage dealt to {} by {}.",
                        self.name, front.name, BARBARIAN_RAGE_MULTIPLIER
                    ));
                    result.log(format!("{} deals {} damage.", self.name, damage));
                }
            }
            HeroClass::Mage => {
                self.hp = self.hp.saturating_mul(5) / 4;
                if let Some(front) = foes.first_mut() {
                    front.take_damage(MAGE_BOLT_DAMAGE);
                }
                result.log(format!(
                    "❤ + 🔥 : {} heals 25% and deals {} damage to their enemy.",
                    self.name, MAGE_BOLT_DAMAGE
                ));
            }
            HeroClass::Healer => {
                self.hp = self.hp.saturating_mul(3) / 2;
                result.log(format!("❤ : {} heals 50%.", self.name));
            }
            HeroClass::Assassin => {
                for foe in foes.iter_mut() {
                    foe.hp = 0;
                }
                foes.clear();
                result.log(format!("🔥🔥🔥 : {} killed every enemy.", self.name));
            }
        }

        result.defeated = foes.first().is_none_or(|front| !front.is_alive());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::EnemyKind;

    fn group() -> Vec<Enemy> {
        vec![
            Enemy::new("A", 120, 1, EnemyKind::Brigand),
            Enemy::new("B", 60, 2, EnemyKind::Gangster),
        ]
    }

    #[test]
    fn test_barbarian_rage() {
        let mut hero = Hero::new("Conan", HeroClass::Barbarian);
        let mut foes = group();
        let result = hero.unleash_special(&mut foes);

        assert_eq!(foes[0].hp, 20);
        assert_eq!(foes[1].hp, 60);
        assert_eq!(hero.hp, 100);
        assert!(!result.defeated);
        assert!(result.logs.iter().any(|l| l == "Conan deals 100 damage."));
    }

    #[test]
    fn test_mage_heals_and_bolts() {
        let mut hero = Hero::new("Merlin", HeroClass::Mage);
        hero.hp = 101;
        let mut foes = group();
        hero.unleash_special(&mut foes);

        assert_eq!(hero.hp, 126);
        assert_eq!(foes[0].hp, 105);
    }

    #[test]
    fn test_healer_heals_self_not_enemy() {
        let mut hero = Hero::new("Ben", HeroClass::Healer);
        hero.hp = 201;
        let mut foes = group();
        hero.unleash_special(&mut foes);

        assert_eq!(hero.hp, 301);
        assert_eq!(foes[0].hp, 120);
        assert_eq!(foes[1].hp, 60);
    }

    #[test]
    fn test_assassin_clears_group() {
        let mut hero = Hero::new("Ezio", HeroClass::Assassin);
        let mut foes = group();
        let result = hero.unleash_special(&mut foes);

        assert!(foes.is_empty());
        assert!(result.defeated);
    }
}
