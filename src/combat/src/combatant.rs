// src/combat/src/combatant.rs

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值 (may drop below zero after a heavy blow)
    fn hp(&self) -> i32;

    fn set_hp(&mut self, hp: i32);

    /// 获取基础攻击力
    fn attack_power(&self) -> u32;

    /// Blows dealt per turn
    fn attack_count(&self) -> u32;

    /// 是否为远程战斗者
    fn is_ranged(&self) -> bool;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    /// Health as shown to the player, never below zero
    fn displayed_hp(&self) -> u32 {
        self.hp().max(0) as u32
    }

    /// 造成伤害
    fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.set_hp(self.hp().saturating_sub(amount));
    }

    fn stats_bar(&self) -> String {
        format!(
            "{} (♥ {} | ⚔ {})",
            self.name(),
            self.displayed_hp(),
            self.attack_power()
        )
    }
}
