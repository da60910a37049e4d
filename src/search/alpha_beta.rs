use crate::core::*;
use crate::moves::{in_check, legal_moves};
use crate::search::evaluation::evaluate_relative;
use crate::search::move_ordering::order_moves;
use crate::search::quiescence::quiescence_search;
use crate::search::transposition::TranspositionTable;
use super::{is_mate_score, Depth, NodeCounter, Score, SearchConfig, SearchResult, INF, MATE_SCORE};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Motor Alpha-Beta com aprofundamento iterativo.
/// Cada instância tem a sua própria TT; o sinal de parada pode ser compartilhado.
pub struct Searcher {
    config: SearchConfig,
    tt: TranspositionTable,
    counter: NodeCounter,
    stop: Arc<AtomicBool>,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let tt = TranspositionTable::with_capacity(config.tt_capacity);
        Self {
            counter: NodeCounter::new(config.node_budget),
            config,
            tt,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sinal de parada externo, consultado entre profundidades e entre lances da raiz.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Nós contados desde o início da última busca (ou do último lance da raiz avaliado).
    pub fn nodes(&self) -> u64 {
        self.counter.nodes
    }

    /// Limpa a TT para novo jogo
    pub fn clear(&mut self) {
        self.tt.clear();
        self.counter = NodeCounter::new(self.config.node_budget);
    }

    /// Negamax fail-soft. Score do ponto de vista de quem joga em `pos`.
    pub fn negamax(&mut self, pos: &Position, depth: Depth, mut alpha: Score, mut beta: Score) -> Score {
        if self.counter.exhausted() {
            return evaluate_relative(pos);
        }

        if depth == 0 {
            self.counter.tick();
            return evaluate_relative(pos);
        }

        let mut moves = legal_moves(pos);
        if moves.is_empty() {
            return if in_check(&pos.board, pos.side_to_move) { -MATE_SCORE } else { 0 };
        }

        let original_alpha = alpha;
        let hash = pos.hash();

        // ========== TT PROBE ==========
        if let Some(entry) = self.tt.lookup(hash) {
            if let Some(score) = entry.cutoff(depth, &mut alpha, &mut beta) {
                return score;
            }
        }

        order_moves(pos, &mut moves, None);

        let mut best_score = -INF;
        for mv in moves {
            let child = pos.apply_move(mv);
            let score = -self.search_child(&child, depth - 1, -beta, -alpha);

            if score > best_score {
                best_score = score;
            }
            alpha = alpha.max(score);

            if alpha >= beta {
                break; // Alpha-beta cutoff
            }
        }

        // ========== TT STORE ==========
        // Resultado truncado pelo orçamento não entra na tabela
        if !self.counter.exhausted() {
            self.tt.store(hash, depth, best_score, original_alpha, beta);
        }

        best_score
    }

    /// Filho com profundidade restante zero é resolvido pela quiescence.
    fn search_child(&mut self, child: &Position, depth: Depth, alpha: Score, beta: Score) -> Score {
        if depth == 0 && self.config.quiescence_depth > 0 && !self.counter.exhausted() {
            quiescence_search(child, alpha, beta, self.config.quiescence_depth, &mut self.counter)
        } else {
            self.negamax(child, depth, alpha, beta)
        }
    }

    /// Score de um lance da raiz com janela completa, do ponto de vista de quem o joga.
    /// O contador de nós recomeça: o orçamento vale para cada lance.
    pub fn score_root_move(&mut self, pos: &Position, mv: Move, depth: Depth) -> Score {
        self.counter = NodeCounter::new(self.config.node_budget);
        let child = pos.apply_move(mv);
        -self.search_child(&child, depth.max(1) - 1, -INF, INF)
    }

    /// Aprofundamento iterativo com limite de tempo, de nós e sinal de parada.
    pub fn search(&mut self, pos: &Position) -> SearchResult {
        let start = Instant::now();
        let deadline = self.config.time_budget.map(|budget| start + budget);
        self.counter = NodeCounter::new(self.config.node_budget);
        self.stop.store(false, Ordering::Relaxed);

        let root_moves = legal_moves(pos);
        if root_moves.is_empty() {
            let score = if in_check(&pos.board, pos.side_to_move) { -MATE_SCORE } else { 0 };
            info!(score, "no legal moves at the root");
            return SearchResult {
                best_move: None,
                score,
                depth: 0,
                nodes_searched: 0,
                time_elapsed: start.elapsed(),
            };
        }

        let mut best_move: Option<Move> = None;
        let mut best_score = -INF;
        let mut reached_depth: Depth = 0;

        // Busca iterativa por profundidade
        for depth in 1..=self.config.max_depth {
            if self.should_stop(deadline) {
                break;
            }

            let mut ordered = root_moves.clone();
            order_moves(pos, &mut ordered, best_move);

            let mut depth_best: Option<(Move, Score)> = None;
            let mut alpha = -INF;
            let mut interrupted = false;

            for mv in ordered {
                if self.should_stop(deadline) {
                    interrupted = true;
                    break;
                }

                let child = pos.apply_move(mv);
                let score = -self.search_child(&child, depth - 1, -INF, -alpha);

                if depth_best.map_or(true, |(_, best)| score > best) {
                    depth_best = Some((mv, score));
                    alpha = alpha.max(score);
                }
            }

            // Profundidade parcial ainda contribui com o melhor lance encontrado
            if let Some((mv, score)) = depth_best {
                best_move = Some(mv);
                best_score = score;
                reached_depth = depth;
                debug!(
                    depth,
                    score,
                    nodes = self.counter.nodes,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    best = %mv,
                    partial = interrupted,
                    "depth finished"
                );
            }

            if interrupted {
                break;
            }

            // Se encontrou mate, para a busca
            if is_mate_score(best_score) {
                break;
            }
        }

        let best_move = match best_move {
            Some(mv) => mv,
            None => {
                let fallback = root_moves[0];
                best_score = evaluate_relative(pos);
                warn!(fallback = %fallback, "budget expired before any root move was scored");
                fallback
            }
        };

        let result = SearchResult {
            best_move: Some(best_move),
            score: best_score,
            depth: reached_depth,
            nodes_searched: self.counter.nodes,
            time_elapsed: start.elapsed(),
        };

        info!(
            best = %best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes_searched,
            hashfull = self.tt.hashfull(),
            "search finished"
        );

        result
    }

    /// Verifica se deve parar a busca
    fn should_stop(&self, deadline: Option<Instant>) -> bool {
        self.stop.load(Ordering::Relaxed)
            || self.counter.exhausted()
            || deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::is_checkmate;
    use std::time::Duration;

    fn config(depth: Depth) -> SearchConfig {
        SearchConfig::default()
            .with_max_depth(depth)
            .with_time_budget(None)
            .with_tt_capacity(1 << 14)
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let mut searcher = Searcher::new(config(1));
        for fen in [START_FEN, "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1"] {
            let pos = Position::from_fen(fen).unwrap();
            assert_eq!(searcher.negamax(&pos, 0, -INF, INF), evaluate_relative(&pos));
        }
    }

    #[test]
    fn terminal_scores() {
        let mut searcher = Searcher::new(config(2));
        let mated = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(searcher.negamax(&mated, 3, -INF, INF), -MATE_SCORE);
        let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(searcher.negamax(&stalemate, 3, -INF, INF), 0);
    }

    #[test]
    fn finds_back_rank_mate() {
        let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut searcher = Searcher::new(config(3));
        let result = searcher.search(&pos);
        let mv = result.best_move.unwrap();
        assert!(is_checkmate(&pos.apply_move(mv)), "{}", mv);
        assert_eq!(result.score, MATE_SCORE);
    }

    #[test]
    fn zero_budget_falls_back_to_first_legal_move() {
        let pos = Position::new();
        let mut searcher = Searcher::new(config(4).with_time_budget(Some(Duration::ZERO)));
        let result = searcher.search(&pos);
        assert_eq!(result.best_move, Some(legal_moves(&pos)[0]));
        assert_eq!(result.depth, 0);
    }

    #[test]
    fn stop_flag_is_reset_at_start() {
        let mut searcher = Searcher::new(config(1));
        searcher.stop_handle().store(true, Ordering::Relaxed);
        let result = searcher.search(&Position::new());
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn node_budget_limits_the_search() {
        let pos = Position::new();
        let mut searcher = Searcher::new(config(6).with_node_budget(Some(500)));
        let result = searcher.search(&pos);
        assert!(result.best_move.is_some());
        assert!(result.depth < 6);
        // Um lance da raiz pode terminar depois do limite, mas só com avaliações estáticas
        assert!(result.nodes_searched <= 501);
    }

    #[test]
    fn root_move_budget_restarts_per_move() {
        let pos = Position::new();
        let mut searcher = Searcher::new(config(3).with_node_budget(Some(10)));
        for mv in legal_moves(&pos) {
            searcher.score_root_move(&pos, mv, 3);
            assert!(searcher.nodes() <= 11, "{} {}", mv, searcher.nodes());
            assert!(searcher.nodes() > 0);
        }
    }

    #[test]
    fn table_is_filled_and_cleared() {
        let mut searcher = Searcher::new(config(3));
        searcher.search(&Position::new());
        assert!(!searcher.tt().is_empty());
        searcher.clear();
        assert!(searcher.tt().is_empty());
    }
}
