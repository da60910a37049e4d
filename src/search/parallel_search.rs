use crate::core::*;
use crate::error::SearchError;
use crate::moves::legal_moves;
use crate::search::alpha_beta::Searcher;
use super::{Depth, Score, SearchConfig};
use crossbeam::channel;
use std::time::Instant;
use tracing::{debug, info};

/// Lance escolhido pelo despacho paralelo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootChoice {
    pub mv: Move,
    /// Score do ponto de vista das brancas.
    pub score: Score,
    /// Nós somados de todos os workers.
    pub nodes: u64,
}

/// Distribui os lances da raiz por um pool fixo de workers, todos com a mesma profundidade.
/// Cada worker tem o seu próprio `Searcher` (e portanto a sua própria TT).
pub struct RootDispatcher {
    config: SearchConfig,
}

impl RootDispatcher {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Melhor lance a `depth` plies (mínimo 1). `Ok(None)` quando não há lances legais.
    pub fn best_move(&self, pos: &Position, depth: Depth) -> Result<Option<RootChoice>, SearchError> {
        let start = Instant::now();
        let depth = depth.max(1);
        let root_moves = legal_moves(pos);
        if root_moves.is_empty() {
            return Ok(None);
        }

        let (task_tx, task_rx) = channel::bounded::<(usize, Move)>(root_moves.len());
        for task in root_moves.iter().copied().enumerate() {
            task_tx.send(task).map_err(|_| SearchError::TaskQueueClosed)?;
        }
        drop(task_tx);

        let workers = self.config.threads.min(root_moves.len());
        // Profundidade fixa, sem prazo; o orçamento de nós vale para cada lance da raiz
        let worker_config = self.config.clone().with_time_budget(None);

        let results = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|worker_id| {
                    let task_rx = task_rx.clone();
                    let worker_config = worker_config.clone();
                    let pos = *pos;

                    s.spawn(move |_| {
                        let mut searcher = Searcher::new(worker_config);
                        let mut scored = Vec::new();
                        let mut nodes = 0;
                        for (idx, mv) in task_rx.iter() {
                            let score = searcher.score_root_move(&pos, mv, depth);
                            nodes += searcher.nodes();
                            scored.push((idx, mv, pos.side_to_move.sign() * score));
                        }
                        debug!(worker_id, moves = scored.len(), nodes, "worker finished");
                        (scored, nodes)
                    })
                })
                .collect();

            // Barreira única: espera todos os workers
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|_| SearchError::WorkerPanicked)?
        .map_err(|_| SearchError::WorkerPanicked)?;

        let mut nodes = 0;
        let mut scored = Vec::with_capacity(root_moves.len());
        for (worker_scores, worker_nodes) in results {
            scored.extend(worker_scores);
            nodes += worker_nodes;
        }
        scored.sort_unstable_by_key(|&(idx, _, _)| idx);

        let choice = pick(&scored, pos.side_to_move).map(|(mv, score)| RootChoice { mv, score, nodes });

        if let Some(choice) = choice {
            info!(
                best = %choice.mv,
                score = choice.score,
                depth,
                workers,
                nodes,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "root dispatch joined"
            );
        }

        Ok(choice)
    }
}

/// Máximo para as brancas, mínimo para as pretas; empate fica com o primeiro na ordem de geração.
fn pick(scored: &[(usize, Move, Score)], side: Color) -> Option<(Move, Score)> {
    let mut best: Option<(Move, Score)> = None;
    for &(_, mv, score) in scored {
        let better = match best {
            None => true,
            Some((_, current)) => match side {
                Color::White => score > current,
                Color::Black => score < current,
            },
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn rejects_invalid_config() {
        let err = RootDispatcher::new(SearchConfig::default().with_threads(0)).err();
        assert_eq!(err, Some(SearchError::Config(ConfigError::NoThreads)));
    }

    #[test]
    fn ties_keep_generation_order() {
        let a = Move::new(8, 16);
        let b = Move::new(9, 17);
        let c = Move::new(10, 18);
        let scored = [(0, a, 5), (1, b, 7), (2, c, 7)];
        assert_eq!(pick(&scored, Color::White), Some((b, 7)));
        assert_eq!(pick(&scored, Color::Black), Some((a, 5)));
        let flat = [(0, a, 0), (1, b, 0)];
        assert_eq!(pick(&flat, Color::Black), Some((a, 0)));
        assert_eq!(pick(&[], Color::White), None);
    }

    #[test]
    fn no_moves_is_none() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let dispatcher = RootDispatcher::new(SearchConfig::default().with_threads(2)).unwrap();
        assert_eq!(dispatcher.best_move(&pos, 2).unwrap(), None);
    }

    #[test]
    fn captures_hanging_queen() {
        let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let dispatcher = RootDispatcher::new(
            SearchConfig::default().with_threads(3).with_tt_capacity(1 << 12),
        )
        .unwrap();
        let choice = dispatcher.best_move(&pos, 1).unwrap().unwrap();
        assert_eq!(choice.mv.to_string(), "e4d5");
        assert!(choice.nodes > 0);
    }

    #[test]
    fn node_budget_applies_to_each_root_move() {
        let pos = Position::new();
        let dispatcher = RootDispatcher::new(
            SearchConfig::default().with_threads(4).with_node_budget(Some(10)),
        )
        .unwrap();
        let choice = dispatcher.best_move(&pos, 3).unwrap().unwrap();
        // 20 lances, cada um com no máximo budget + 1 nós
        assert!(choice.nodes <= 20 * 11, "{}", choice.nodes);
        assert!(choice.nodes >= 20);
    }
}
