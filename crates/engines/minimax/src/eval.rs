//! Position evaluation in four difficulty tiers
//!
//! Every tier is a weighted sum of per-piece features. Own pieces count
//! positive, enemy pieces negative; the weights decide which features a tier
//! looks at at all.

use std::fmt;
use std::str::FromStr;

use jungle_core::{manhattan, neighbours, Player, Position, Species, Square, SquareSet};
use serde::{Deserialize, Serialize};

/// Score of a decided game, from the winner's point of view.
pub const WIN_SCORE: f64 = 100_000.0;

/// Longest Manhattan distance between a piece and a lair on the 7x9 board.
pub const MAX_DISTANCE: f64 = 11.0;

/// Scores a position for one side. Higher is better for `perspective`.
pub trait Evaluator {
    fn evaluate(&self, pos: &Position, perspective: Player) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Position, Player) -> f64,
{
    fn evaluate(&self, pos: &Position, perspective: Player) -> f64 {
        self(pos, perspective)
    }
}

/// Built-in evaluators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalTier {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

/// Feature weights for one tier. A zero weight switches the feature off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub material: f64,
    /// Material value of the rat, which the lighter tiers inflate.
    pub rat_value: f64,
    pub den_progress: f64,
    pub mobility: f64,
    pub capture_opportunity: f64,
    pub under_attack: f64,
    pub trap_control: f64,
    pub den_defence: f64,
    pub den_defence_exponent: f64,
    pub rat_position: f64,
    pub protection: f64,
    /// Scale each protected piece's bonus by `rank / 8`.
    pub protection_by_rank: bool,
    pub riverbank: f64,
    pub threats: f64,
    pub jump_ready: f64,
}

const EASY: Weights = Weights {
    material: 1.0,
    rat_value: 5.0,
    den_progress: 0.5,
    mobility: 0.3,
    capture_opportunity: 0.0,
    under_attack: 0.0,
    trap_control: 0.0,
    den_defence: 0.0,
    den_defence_exponent: 1.0,
    rat_position: 0.0,
    protection: 0.0,
    protection_by_rank: false,
    riverbank: 0.0,
    threats: 0.0,
    jump_ready: 0.0,
};

const MEDIUM: Weights = Weights {
    capture_opportunity: 0.3,
    under_attack: 0.2,
    ..EASY
};

const HARD: Weights = Weights {
    material: 1.0,
    rat_value: 1.0,
    den_progress: 0.5,
    mobility: 0.3,
    capture_opportunity: 0.0,
    under_attack: 0.0,
    trap_control: 0.2,
    den_defence: 1.0,
    den_defence_exponent: 1.0,
    rat_position: 0.1,
    protection: 0.1,
    protection_by_rank: false,
    riverbank: 0.05,
    threats: 0.0,
    jump_ready: 0.0,
};

const IMPOSSIBLE: Weights = Weights {
    material: 10.0,
    rat_value: 1.0,
    den_progress: 2.0,
    mobility: 1.5,
    capture_opportunity: 0.0,
    under_attack: 0.0,
    trap_control: 5.0,
    den_defence: 20.0,
    den_defence_exponent: 1.5,
    rat_position: 3.0,
    protection: 2.0,
    protection_by_rank: true,
    riverbank: 1.0,
    threats: 15.0,
    jump_ready: 4.0,
};

impl EvalTier {
    pub const ALL: [EvalTier; 4] = [
        EvalTier::Easy,
        EvalTier::Medium,
        EvalTier::Hard,
        EvalTier::Impossible,
    ];

    pub fn weights(self) -> &'static Weights {
        match self {
            EvalTier::Easy => &EASY,
            EvalTier::Medium => &MEDIUM,
            EvalTier::Hard => &HARD,
            EvalTier::Impossible => &IMPOSSIBLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvalTier::Easy => "easy",
            EvalTier::Medium => "medium",
            EvalTier::Hard => "hard",
            EvalTier::Impossible => "impossible",
        }
    }
}

impl fmt::Display for EvalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluation tier '{0}' (expected easy, medium, hard or impossible)")]
pub struct ParseTierError(pub String);

impl FromStr for EvalTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvalTier::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTierError(s.to_string()))
    }
}

impl Evaluator for EvalTier {
    fn evaluate(&self, pos: &Position, perspective: Player) -> f64 {
        evaluate_with(self.weights(), pos, perspective)
    }
}

/// Legal destinations of every piece, computed once per evaluation.
struct PieceInfo {
    square: Square,
    species: Species,
    owner: Player,
    destinations: SquareSet,
}

fn sign(owner: Player, perspective: Player) -> f64 {
    if owner == perspective {
        1.0
    } else {
        -1.0
    }
}

/// Material worth of a piece, zero while it stands on a trap guarding the
/// enemy lair.
fn material_value(w: &Weights, pos: &Position, info: &PieceInfo) -> f64 {
    if pos.geography().traps(info.owner.other()).contains(info.square) {
        return 0.0;
    }
    if info.species == Species::Rat {
        w.rat_value
    } else {
        f64::from(info.species.rank())
    }
}

/// Evaluate `pos` for `perspective` under an arbitrary weight set.
pub fn evaluate_with(w: &Weights, pos: &Position, perspective: Player) -> f64 {
    if let Some(winner) = pos.winner {
        return if winner == perspective {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }

    let geo = pos.geography();
    let pieces: Vec<PieceInfo> = pos
        .pieces()
        .map(|(square, p)| PieceInfo {
            square,
            species: p.species,
            owner: p.owner,
            destinations: pos.legal_destinations(square),
        })
        .collect();

    let mut reach = [SquareSet::EMPTY; 2];
    for info in &pieces {
        reach[info.owner.idx()] |= info.destinations;
    }
    let occupied = [
        pos.occupied_by(Player::One),
        pos.occupied_by(Player::Two),
    ];

    let mut score = 0.0;

    for info in &pieces {
        let s = sign(info.owner, perspective);
        let enemy = info.owner.other();
        let value = material_value(w, pos, info);
        let mut contribution = value * w.material;

        let distance = manhattan(info.square, geo.lair(enemy));
        contribution += (MAX_DISTANCE - f64::from(distance)) * w.den_progress;
        contribution += f64::from(info.destinations.len()) * w.mobility;

        if w.capture_opportunity != 0.0 {
            let targets = info.destinations & occupied[enemy.idx()];
            let worth: f64 = pieces
                .iter()
                .filter(|t| targets.contains(t.square))
                .map(|t| material_value(w, pos, t))
                .sum();
            contribution += worth * w.capture_opportunity;
        }

        if w.under_attack != 0.0 && reach[enemy.idx()].contains(info.square) {
            contribution -= value * w.under_attack;
        }

        if w.protection != 0.0 {
            let friends = neighbours(info.square)
                .filter(|&n| occupied[info.owner.idx()].contains(n))
                .count() as f64;
            let scale = if w.protection_by_rank {
                f64::from(info.species.rank()) / 8.0
            } else {
                1.0
            };
            contribution += friends * w.protection * scale;
        }

        if geo.riverbank().contains(info.square) {
            contribution += w.riverbank;
        }

        if w.threats != 0.0 {
            let prey: u32 = pieces
                .iter()
                .filter(|t| {
                    t.owner == enemy
                        && manhattan(info.square, t.square) == 1
                        && info.destinations.contains(t.square)
                })
                .map(|t| u32::from(t.species.rank()))
                .sum();
            contribution += f64::from(prey) * w.threats;
        }

        if w.jump_ready != 0.0
            && info.species.can_jump()
            && !jungle_core::jump_destinations(pos, info.square).is_empty()
        {
            contribution += w.jump_ready;
        }

        score += s * contribution;
    }

    if w.trap_control != 0.0 {
        for player in Player::ALL {
            let mut control = 0u32;
            for trap in geo.traps(player.other()) {
                control += neighbours(trap)
                    .filter(|&n| occupied[player.idx()].contains(n))
                    .count() as u32;
            }
            score += sign(player, perspective) * f64::from(control) * w.trap_control;
        }
    }

    if w.rat_position != 0.0 {
        for player in Player::ALL {
            let Some(rat) = pos.find(Species::Rat, player) else {
                continue;
            };
            let mut bonus = 0.0;
            if geo.is_water(rat) {
                bonus += w.rat_position;
            }
            for (s, p) in pos.pieces_of(player.other()) {
                if p.species == Species::Elephant && manhattan(s, rat) == 1 {
                    bonus += w.rat_position;
                }
            }
            score += sign(player, perspective) * bonus;
        }
    }

    // Only the evaluating side worries about its own lair.
    if w.den_defence != 0.0 {
        let lair = geo.lair(perspective);
        let nearest = pieces
            .iter()
            .filter(|p| p.owner != perspective)
            .map(|p| manhattan(p.square, lair))
            .min();
        if let Some(d) = nearest {
            let closeness = (MAX_DISTANCE - f64::from(d)).max(0.0);
            score -= w.den_defence * closeness.powf(w.den_defence_exponent);
        }
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
