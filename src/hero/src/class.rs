// src/hero/src/class.rs

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// Outer width of a class card, borders excluded
const CARD_WIDTH: usize = 45;
/// Room left for text inside a card
const CARD_TEXT_WIDTH: usize = CARD_WIDTH - 2;

/// 英雄职业枚举
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum HeroClass {
    #[default]
    Barbarian, // 野蛮人（低生命值，高攻击）
    Mage,     // 法师
    Healer,   // 治疗者（生命值极高，攻击极低）
    Assassin, // 刺客
}

impl HeroClass {
    /// Menu choice (1-based) to class; anything unknown picks the barbarian
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            2 => HeroClass::Mage,
            3 => HeroClass::Healer,
            4 => HeroClass::Assassin,
            _ => HeroClass::Barbarian,
        }
    }

    /// 获取职业的基础生命值
    pub fn base_hp(&self) -> i32 {
        match self {
            HeroClass::Barbarian => 100,
            HeroClass::Mage => 250,
            HeroClass::Healer => 500,
            HeroClass::Assassin => 150,
        }
    }

    /// 获取职业的攻击力
    pub fn base_attack(&self) -> u32 {
        match self {
            HeroClass::Barbarian => 5,
            HeroClass::Mage => 2,
            HeroClass::Healer => 1,
            HeroClass::Assassin => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Barbarian => "Barbarian",
            HeroClass::Mage => "Mage",
            HeroClass::Healer => "Healer",
            HeroClass::Assassin => "Assassin",
        }
    }

    /// What the one-time special ability does
    pub fn description(&self) -> &'static str {
        match self {
            HeroClass::Barbarian => "Flies into a rage and multiplies the damage dealt to one enemy by 20",
            HeroClass::Mage => "Heals 25% of their health and deals 15 damage to one enemy",
            HeroClass::Healer => "Heals 50% of their health",
            HeroClass::Assassin => "One-shots every enemy of the group",
        }
    }

    /// Boxed card with the class name and its word-wrapped description
    pub fn card(&self) -> String {
        let border = "─".repeat(CARD_WIDTH);
        let mut lines = vec![
            format!("┌{}┐", border),
            format!("│ {:<width$} │", self.name(), width = CARD_TEXT_WIDTH),
            format!("├{}┤", border),
        ];
        for line in wrap(self.description(), CARD_TEXT_WIDTH) {
            lines.push(format!("│ {:<width$} │", line, width = CARD_TEXT_WIDTH));
        }
        lines.push(format!("└{}┘", border));
        lines.join("\n")
    }

    /// Every class card, numbered for the selection menu
    pub fn catalogue() -> String {
        HeroClass::iter()
            .enumerate()
            .map(|(i, class)| format!("{}.\n{}", i + 1, class.card()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Greedy word wrap. A word longer than `width` gets a line of its own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + word.chars().count() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_table() {
        assert_eq!(HeroClass::Barbarian.base_hp(), 100);
        assert_eq!(HeroClass::Barbarian.base_attack(), 5);
        assert_eq!(HeroClass::Mage.base_hp(), 250);
        assert_eq!(HeroClass::Mage.base_attack(), 2);
        assert_eq!(HeroClass::Healer.base_hp(), 500);
        assert_eq!(HeroClass::Healer.base_attack(), 1);
        assert_eq!(HeroClass::Assassin.base_hp(), 150);
        assert_eq!(HeroClass::Assassin.base_attack(), 2);
    }

    #[test]
    fn test_from_choice_defaults_to_barbarian() {
        assert_eq!(HeroClass::from_choice(2), HeroClass::Mage);
        assert_eq!(HeroClass::from_choice(3), HeroClass::Healer);
        assert_eq!(HeroClass::from_choice(4), HeroClass::Assassin);
        assert_eq!(HeroClass::from_choice(1), HeroClass::Barbarian);
        assert_eq!(HeroClass::from_choice(9), HeroClass::Barbarian);
    }

    #[test]
    fn test_card_lines_have_equal_width() {
        for class in HeroClass::iter() {
            let card = class.card();
            let widths: Vec<usize> = card.lines().map(|l| l.chars().count()).collect();
            assert!(widths.iter().all(|&w| w == CARD_WIDTH + 2), "{class}: {widths:?}");
            assert!(card.contains(class.name()));
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap(HeroClass::Barbarian.description(), 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), HeroClass::Barbarian.description());
    }

    #[test]
    fn test_catalogue_numbers_every_class() {
        let catalogue = HeroClass::catalogue();
        for n in 1..=4 {
            assert!(catalogue.contains(&format!("{}.\n┌", n)));
        }
    }
}
