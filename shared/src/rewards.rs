//! Reward points. Every uploaded menu earns the same flat amount.

use crate::model::MenuRecord;

pub const POINTS_PER_MENU: u32 = 100;

pub fn points_for(_menu: &MenuRecord) -> u32 {
    POINTS_PER_MENU
}

pub fn total_points(menus: &[MenuRecord]) -> u32 {
    menus.iter().map(points_for).sum()
}
