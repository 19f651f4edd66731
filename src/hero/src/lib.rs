// src/hero/src/lib.rs

// 核心模块
mod abilities;
mod combat;
mod core;

// 子模块
pub mod class;

// 重新导出主要类型
pub use self::{
    abilities::{BARBARIAN_RAGE_MULTIPLIER, MAGE_BOLT_DAMAGE},
    combat::TRIVIA_MULTIPLIER,
    core::{Hero, START_POSITION},
};
pub use crate::class::HeroClass;
