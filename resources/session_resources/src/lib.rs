use {bevy::prelude::*, kitchen_components::IngredientType};

pub struct SessionResourcesPlugin;

impl Plugin for SessionResourcesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Session>()
            .register_type::<Hand>()
            .register_type::<PlateStack>()
            .init_resource::<Session>()
            .init_resource::<Hand>()
            .init_resource::<PlateStack>()
            .init_resource::<CrosshairTarget>();
    }
}

/// Shift-wide progression state. Score and the completed counter never
/// decrease except through [`Session::reset`], and `game_won` latches until
/// reset. All mutation goes through the methods below.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct Session {
    pub score: u32,
    pub completed_count: u32,
    pub game_won: bool,
    pub last_message: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::welcome(5)
    }
}

impl Session {
    pub fn welcome(target_hot_dogs: u32) -> Self {
        Self {
            score: 0,
            completed_count: 0,
            game_won: false,
            last_message: format!("Welcome! Make {target_hot_dogs} Hot Dogs!"),
        }
    }

    pub fn post_message(&mut self, message: impl Into<String>) {
        self.last_message = message.into();
    }

    /// Records one finished hot dog. Awards the per-order score, and the win
    /// bonus exactly once when the counter reaches `target_hot_dogs`.
    /// Returns whether this order won the game.
    pub fn complete_order(&mut self, order_score: u32, win_bonus: u32, target_hot_dogs: u32) -> bool {
        self.completed_count += 1;
        let won = self.completed_count >= target_hot_dogs;
        self.score += order_score;
        if won && !self.game_won {
            self.score += win_bonus;
            self.game_won = true;
        }
        if won {
            self.post_message("MISSION COMPLETE!");
        } else {
            self.post_message(format!("Hot Dog #{} Done!", self.completed_count));
        }
        won
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.completed_count = 0;
        self.game_won = false;
        self.post_message("New Shift Started!");
    }
}

/// The single-slot hand. An ingredient is either held here or simulated in
/// the world, never both.
#[derive(Resource, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Resource, Default)]
pub struct Hand(pub Option<IngredientType>);

impl Hand {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

#[derive(Resource, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Resource, Default)]
pub struct PlateStack {
    pub has_bun: bool,
    pub has_sausage: bool,
}

impl PlateStack {
    pub fn clear(&mut self) {
        self.has_bun = false;
        self.has_sausage = false;
    }

    /// What the current order is waiting for, if anything.
    pub fn next_needed(&self) -> Option<IngredientType> {
        if !self.has_bun {
            Some(IngredientType::Bun)
        } else if !self.has_sausage {
            Some(IngredientType::Sausage)
        } else {
            None
        }
    }
}

/// What the aim ray currently points at. Written by the targeting resolver,
/// read by the crosshair and the interact handler.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CrosshairTarget {
    pub hovered: Option<Hovered>,
}

#[derive(Debug, Clone, Copy)]
pub struct Hovered {
    pub entity: Entity,
    pub ingredient: IngredientType,
    pub is_spawner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_order_scores_and_counts() {
        let mut session = Session::welcome(5);
        assert!(!session.complete_order(100, 500, 5));
        assert_eq!(session.score, 100);
        assert_eq!(session.completed_count, 1);
        assert!(!session.game_won);
        assert_eq!(session.last_message, "Hot Dog #1 Done!");
    }

    #[test]
    fn win_bonus_awarded_exactly_once() {
        let mut session = Session::welcome(2);
        session.complete_order(100, 500, 2);
        assert!(session.complete_order(100, 500, 2));
        assert!(session.game_won);
        assert_eq!(session.score, 700);
        assert_eq!(session.last_message, "MISSION COMPLETE!");

        // A stray extra completion must not re-award the bonus.
        session.complete_order(100, 500, 2);
        assert_eq!(session.score, 800);
    }

    #[test]
    fn score_never_decreases() {
        let mut session = Session::welcome(3);
        let mut last = 0;
        for _ in 0..6 {
            session.complete_order(100, 500, 3);
            assert!(session.score >= last);
            last = session.score;
        }
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut session = Session::welcome(2);
        session.complete_order(100, 500, 2);
        session.complete_order(100, 500, 2);
        session.reset();
        assert_eq!(session.score, 0);
        assert_eq!(session.completed_count, 0);
        assert!(!session.game_won);
        assert_eq!(session.last_message, "New Shift Started!");
    }

    #[test]
    fn next_needed_follows_assembly_order() {
        let mut plate = PlateStack::default();
        assert_eq!(plate.next_needed(), Some(IngredientType::Bun));
        plate.has_bun = true;
        assert_eq!(plate.next_needed(), Some(IngredientType::Sausage));
        plate.has_sausage = true;
        assert_eq!(plate.next_needed(), None);
        plate.clear();
        assert_eq!(plate.next_needed(), Some(IngredientType::Bun));
    }
}
