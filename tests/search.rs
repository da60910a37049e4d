use lance::moves::{is_checkmate, legal_moves};
use lance::search::{evaluate_relative, SearchConfig, Searcher, INF, MATE_SCORE};
use lance::{Position, START_FEN};
use std::time::Duration;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

fn fixed_depth(depth: u8) -> SearchConfig {
    SearchConfig::default()
        .with_max_depth(depth)
        .with_time_budget(None)
        .with_tt_capacity(1 << 16)
}

#[test]
fn depth_zero_equals_static_evaluation() {
    let mut searcher = Searcher::new(fixed_depth(1));
    for fen in [
        START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
    ] {
        let position = pos(fen);
        assert_eq!(searcher.negamax(&position, 0, -INF, INF), evaluate_relative(&position), "{}", fen);
    }
}

#[test]
fn white_finds_mate_in_one() {
    let position = pos("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let result = Searcher::new(fixed_depth(4)).search(&position);
    let mv = result.best_move.expect("a move");
    assert!(is_checkmate(&position.apply_move(mv)), "{}", mv);
    assert_eq!(result.score, MATE_SCORE);
    // Mate encontrado na profundidade 2 encerra o aprofundamento
    assert_eq!(result.depth, 2);
}

#[test]
fn black_finds_mate_in_one() {
    let position = pos("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
    let result = Searcher::new(fixed_depth(3)).search(&position);
    assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("a8a1".to_string()));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn wins_material_for_either_side() {
    let white = pos("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let result = Searcher::new(fixed_depth(3)).search(&white);
    assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("e4d5".to_string()));

    let black = pos("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1");
    let result = Searcher::new(fixed_depth(3)).search(&black);
    assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("e5d4".to_string()));
    assert!(result.score > 0);
}

#[test]
fn zero_time_budget_returns_first_legal_move() {
    let position = Position::new();
    let config = fixed_depth(5).with_time_budget(Some(Duration::ZERO));
    let result = Searcher::new(config).search(&position);
    assert_eq!(result.best_move, Some(legal_moves(&position)[0]));
    assert_eq!(result.nodes_searched, 0);
}

#[test]
fn no_legal_moves_returns_none() {
    let mated = pos("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let result = Searcher::new(fixed_depth(3)).search(&mated);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);

    let stalemate = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = Searcher::new(fixed_depth(3)).search(&stalemate);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn short_deadline_still_returns_a_legal_move() {
    let position = pos("r1bq1rk1/ppp2ppp/2n2n2/3pp3/3PP3/2P2N2/PP1N1PPP/R1BQ1RK1 w - - 0 8");
    let config = fixed_depth(30).with_time_budget(Some(Duration::from_millis(50)));
    let result = Searcher::new(config).search(&position);
    let mv = result.best_move.expect("a move");
    assert!(legal_moves(&position).contains(&mv));
    assert!(result.depth < 30);
}

#[test]
fn node_budget_caps_the_work() {
    let position = Position::new();
    let unlimited = Searcher::new(fixed_depth(3)).search(&position);
    let limited = Searcher::new(fixed_depth(3).with_node_budget(Some(100))).search(&position);
    assert!(limited.nodes_searched <= 101);
    assert!(limited.nodes_searched < unlimited.nodes_searched);
    assert!(limited.best_move.is_some());
}

// A profundidade 2 é cortada depois do primeiro lance da raiz e ainda conta.
#[test]
fn interrupted_depth_keeps_its_best_move() {
    let position = pos("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let depth_one = Searcher::new(fixed_depth(1)).search(&position);
    assert_eq!(depth_one.depth, 1);
    let leader = depth_one.best_move.expect("a move");
    assert_eq!(leader.to_string(), "e4d5");

    // Orçamento que completa a profundidade 1 e esgota durante o primeiro lance da 2
    let budget = depth_one.nodes_searched + 1;
    let result = Searcher::new(fixed_depth(4).with_node_budget(Some(budget))).search(&position);
    assert_eq!(result.depth, 2);
    assert_eq!(result.best_move, Some(leader));
    assert_eq!(result.nodes_searched, budget + 1);
}

#[test]
fn quiescence_can_be_disabled() {
    // Sem quiescence, a profundidade 1 não vê a recaptura de d5
    let position = pos("4k3/8/2p5/3p4/8/8/3Q4/4K3 w - - 0 1");
    let greedy = Searcher::new(fixed_depth(1).with_quiescence_depth(0)).search(&position);
    assert_eq!(greedy.best_move.map(|mv| mv.to_string()), Some("d2d5".to_string()));

    let careful = Searcher::new(fixed_depth(1)).search(&position);
    assert_ne!(careful.best_move.map(|mv| mv.to_string()), Some("d2d5".to_string()));
}
