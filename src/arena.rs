//! Computer versus computer matches between move selectors

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;

use std::time::Instant;

use crate::{
    board::Piece,
    config::{Config, Control, First, Selector},
    game::{Game, GameState},
    Result,
};

/// Totals over all games of a match
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct ArenaReport {
    pub one_wins: usize,
    pub two_wins: usize,
    pub draws: usize,
    /// Positions visited by both selectors over the whole match
    pub nodes: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.one_wins + self.two_wins + self.draws
    }

    fn add(mut self, state: GameState, nodes: usize) -> Self {
        match state {
            GameState::PlayerOneWin => self.one_wins += 1,
            GameState::PlayerTwoWin => self.two_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing => unreachable!("unfinished game in the arena report"),
        }
        self.nodes += nodes;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            one_wins: self.one_wins + other.one_wins,
            two_wins: self.two_wins + other.two_wins,
            draws: self.draws + other.draws,
            nodes: self.nodes + other.nodes,
        }
    }
}

/// Plays the selectors of player one and player two against each other
pub struct Arena {
    config: Config,
    selectors: [Selector; 2],
}

impl Arena {
    pub fn new(config: Config, selectors: [Selector; 2]) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, selectors })
    }

    /// Plays one game to the end, player one opening when `one_starts`
    pub fn play(&self, one_starts: bool) -> Result<(GameState, usize)> {
        let config = Config {
            players: [Control::Ai, Control::Ai],
            first: if one_starts { First::One } else { First::Two },
            ..self.config.clone()
        };
        let mut game = Game::new(config)?;
        let mut nodes = 0;

        while game.state() == GameState::Playing {
            let selector = match game.turn() {
                Piece::One => self.selectors[0],
                Piece::Two => self.selectors[1],
            };
            let decision = game.decide(selector)?;
            nodes += decision.nodes;
            game.play_checked(decision.column + 1)?;
        }
        Ok((game.state(), nodes))
    }

    /// Plays `games` independent games in parallel, alternating the opening player
    pub fn run(&self, games: usize) -> Result<ArenaReport> {
        let progress = ProgressBar::new(games as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
                .progress_chars("█▓▒░  "),
        );
        self.run_with_progress(games, &progress)
    }

    /// Like [`Arena::run`], reporting to `progress`, which is finished even
    /// when a game fails
    pub fn run_with_progress(&self, games: usize, progress: &ProgressBar) -> Result<ArenaReport> {
        let start = Instant::now();

        let report = (0..games)
            .into_par_iter()
            .map(|i| {
                let result = self.play(i % 2 == 0);
                progress.inc(1);
                result
            })
            .try_fold(ArenaReport::default, |report, result| {
                result.map(|(state, nodes)| report.add(state, nodes))
            })
            .try_reduce(ArenaReport::default, |a, b| Ok(a.merge(b)));

        progress.finish();
        let report = report?;
        debug!(
            "{} games in {:.2}s, {} nodes",
            report.games(),
            start.elapsed().as_secs_f64(),
            report.nodes
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(selectors: [Selector; 2]) -> Arena {
        Arena::new(
            Config {
                depth: 2,
                ..Config::default()
            },
            selectors,
        )
        .unwrap()
    }

    #[test]
    fn every_game_is_counted() -> Result<()> {
        let report = arena([Selector::Minimax, Selector::Greedy]).run(4)?;
        assert_eq!(report.games(), 4);
        assert!(report.nodes > 0);
        Ok(())
    }

    #[test]
    fn games_are_deterministic() -> Result<()> {
        let arena = arena([Selector::Greedy, Selector::Minimax]);
        assert_eq!(arena.play(true)?, arena.play(true)?);
        assert_ne!(arena.play(false)?.0, GameState::Playing);
        Ok(())
    }

    #[test]
    fn results_are_tallied_by_outcome() {
        let report = ArenaReport::default()
            .add(GameState::PlayerOneWin, 3)
            .add(GameState::Draw, 4)
            .add(GameState::PlayerTwoWin, 5)
            .add(GameState::Draw, 1);
        assert_eq!(
            report,
            ArenaReport {
                one_wins: 1,
                two_wins: 1,
                draws: 2,
                nodes: 13,
            }
        );
    }

    #[test]
    #[should_panic]
    fn unfinished_game_is_not_a_draw() {
        ArenaReport::default().add(GameState::Playing, 0);
    }

    #[test]
    fn failing_games_still_finish_the_progress_bar() {
        // skip validation so every game fails to start
        let arena = Arena {
            config: Config {
                depth: 0,
                ..Config::default()
            },
            selectors: [Selector::Minimax, Selector::Greedy],
        };
        let progress = ProgressBar::hidden();
        progress.set_length(8);
        assert_eq!(
            arena.run_with_progress(8, &progress),
            Err(crate::Error::InvalidDepth(0))
        );
        assert_eq!(progress.position(), progress.length());
    }

    #[test]
    fn greedy_mirror_match_finishes() -> Result<()> {
        let report = arena([Selector::Greedy, Selector::Greedy]).run(2)?;
        assert_eq!(report.games(), 2);
        Ok(())
    }
}
