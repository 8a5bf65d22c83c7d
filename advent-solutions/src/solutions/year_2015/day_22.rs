//! Day 22: Wizard Simulator 20XX
//!
//! Least mana spent to win a turn-based duel. Every state of the fight is a
//! node, every spell cast (followed by the boss's turn) an edge weighted by the
//! spell's mana cost, so the cheapest win is a shortest path.

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::anyhow;

use crate::utils::input::parse_ints;
use crate::utils::search::{Edge, dijkstra};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 22, tags = ["dijkstra", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boss {
    pub hit_points: i32,
    pub damage: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    const ALL: [Self; 5] = [
        Self::MagicMissile,
        Self::Drain,
        Self::Shield,
        Self::Poison,
        Self::Recharge,
    ];

    const fn cost(self) -> i32 {
        match self {
            Self::MagicMissile => 53,
            Self::Drain => 73,
            Self::Shield => 113,
            Self::Poison => 173,
            Self::Recharge => 229,
        }
    }
}

/// The fight at the start of a player turn, or the end of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Fighting(Fight),
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Fight {
    player_hp: i32,
    mana: i32,
    boss_hp: i32,
    shield: u8,
    poison: u8,
    recharge: u8,
}

impl Fight {
    /// Tick active effects. Returns `true` if that killed the boss.
    fn apply_effects(&mut self) -> bool {
        if self.poison > 0 {
            self.boss_hp -= 3;
            self.poison -= 1;
        }
        if self.recharge > 0 {
            self.mana += 101;
            self.recharge -= 1;
        }
        self.shield = self.shield.saturating_sub(1);
        self.boss_hp <= 0
    }

    fn armor(&self) -> i32 {
        if self.shield > 0 { 7 } else { 0 }
    }

    fn can_cast(&self, spell: Spell) -> bool {
        let inactive = match spell {
            Spell::Shield => self.shield == 0,
            Spell::Poison => self.poison == 0,
            Spell::Recharge => self.recharge == 0,
            Spell::MagicMissile | Spell::Drain => true,
        };
        inactive && spell.cost() <= self.mana
    }

    fn cast(&mut self, spell: Spell) {
        self.mana -= spell.cost();
        match spell {
            Spell::MagicMissile => self.boss_hp -= 4,
            Spell::Drain => {
                self.boss_hp -= 2;
                self.player_hp += 2;
            }
            Spell::Shield => self.shield = 6,
            Spell::Poison => self.poison = 6,
            Spell::Recharge => self.recharge = 5,
        }
    }

    /// One full round starting with the player's turn, one edge per spell.
    fn rounds(mut self, boss_damage: i32, hard: bool) -> Vec<Edge<Node>> {
        if hard {
            self.player_hp -= 1;
            if self.player_hp <= 0 {
                return Vec::new();
            }
        }
        if self.apply_effects() {
            return vec![Edge::new(Node::Won, 0)];
        }

        Spell::ALL
            .into_iter()
            .filter(|&spell| self.can_cast(spell))
            .filter_map(|spell| {
                let mut next = self;
                next.cast(spell);
                let cost = spell.cost() as u64;
                if next.boss_hp <= 0 || next.apply_effects() {
                    return Some(Edge::new(Node::Won, cost));
                }
                next.player_hp -= (boss_damage - next.armor()).max(1);
                (next.player_hp > 0).then_some(Edge::new(Node::Fighting(next), cost))
            })
            .collect()
    }
}

/// Least mana that still wins the fight, `None` if the fight cannot be won.
pub fn least_mana_to_win(boss: Boss, player_hp: i32, mana: i32, hard: bool) -> Option<u64> {
    let start = Node::Fighting(Fight {
        player_hp,
        mana,
        boss_hp: boss.hit_points,
        shield: 0,
        poison: 0,
        recharge: 0,
    });

    dijkstra(
        start,
        |node| *node == Node::Won,
        |node| match node {
            Node::Fighting(fight) => fight.rounds(boss.damage, hard),
            Node::Won => Vec::new(),
        },
    )
}

fn answer(boss: &Boss, hard: bool) -> Result<String, SolveError> {
    least_mana_to_win(*boss, 50, 500, hard)
        .map(|mana| mana.to_string())
        .ok_or_else(|| SolveError::NoSolution("the boss cannot be beaten".into()))
}

impl AocParser for Solver {
    type SharedData<'a> = Boss;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers: Vec<i32> = input.lines().flat_map(parse_ints::<i32>).collect();
        let boss = match numbers.as_slice() {
            &[hit_points, damage] => Ok(Boss { hit_points, damage }),
            other => Err(anyhow!("expected hit points and damage, found {other:?}")),
        };
        boss.map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, true)
    }
}
