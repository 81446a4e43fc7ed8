/// Base points for defeating one enemy.
pub const ENEMY_POINTS: u32 = 10;
/// Highest combo multiplier.
pub const MAX_COMBO_MULTIPLIER: u32 = 5;

pub const FIRST_STRIKE: &str = "First Strike";
pub const COMBO_MASTER: &str = "Combo Master";
pub const DEMON_SLAYER: &str = "Demon Slayer";

/// Combo needed for "Combo Master".
pub const COMBO_MASTER_THRESHOLD: u32 = 5;
/// Defeats needed for "Demon Slayer".
pub const DEMON_SLAYER_THRESHOLD: u32 = 25;

/// Multiplier for the current combo, from 1 up to the cap.
pub fn combo_multiplier(combo: u32) -> u32 {
    combo.clamp(1, MAX_COMBO_MULTIPLIER)
}

/// Points for a hit that brought the combo to `combo`.
pub fn hit_points(combo: u32) -> u32 {
    ENEMY_POINTS * combo_multiplier(combo)
}

/// Level reached with `score` points.
pub fn level_for_score(score: u32, points_per_level: u32) -> u32 {
    1 + score / points_per_level.max(1)
}

/// Achievements earned by these totals, in unlock order.
pub fn earned_achievements(defeated: u32, combo: u32) -> impl Iterator<Item = &'static str> {
    [
        (defeated >= 1, FIRST_STRIKE),
        (combo >= COMBO_MASTER_THRESHOLD, COMBO_MASTER),
        (defeated >= DEMON_SLAYER_THRESHOLD, DEMON_SLAYER),
    ]
    .into_iter()
    .filter_map(|(earned, name)| earned.then_some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_is_capped() {
        assert_eq!(hit_points(0), 10);
        assert_eq!(hit_points(1), 10);
        assert_eq!(hit_points(3), 30);
        assert_eq!(hit_points(9), 50);
    }

    #[test]
    fn level_every_500_points() {
        assert_eq!(level_for_score(0, 500), 1);
        assert_eq!(level_for_score(499, 500), 1);
        assert_eq!(level_for_score(500, 500), 2);
        assert_eq!(level_for_score(1250, 500), 3);
        assert_eq!(level_for_score(10, 0), 11);
    }

    #[test]
    fn achievements_by_threshold() {
        assert_eq!(earned_achievements(0, 0).count(), 0);
        assert_eq!(earned_achievements(1, 1).collect::<Vec<_>>(), [FIRST_STRIKE]);
        assert_eq!(
            earned_achievements(25, 5).collect::<Vec<_>>(),
            [FIRST_STRIKE, COMBO_MASTER, DEMON_SLAYER]
        );
    }
}
