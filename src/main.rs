// Motor de Xadrez - Demonstração de geração de lances e busca
use lance::moves::{in_check, legal_moves, perft};
use lance::search::{RootDispatcher, SearchConfig, Searcher};
use lance::*;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Uma FEN na linha de comando substitui as posições de teste
    let args: Vec<String> = std::env::args().skip(1).collect();
    let positions: Vec<(String, String)> = if args.is_empty() {
        vec![
            ("Posição inicial".to_string(), START_FEN.to_string()),
            ("Posição complexa".to_string(), "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1".to_string()),
            ("Final de jogo".to_string(), "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".to_string()),
        ]
    } else {
        vec![("Posição".to_string(), args.join(" "))]
    };

    let config = SearchConfig::default()
        .with_max_depth(5)
        .with_time_budget(Some(Duration::from_secs(3)));

    for (name, fen) in &positions {
        println!("=== {} ===", name);
        println!("FEN: {}", fen);

        match Position::from_fen(fen) {
            Ok(pos) => {
                show_moves(&pos);
                run_search(&pos, &config);
            }
            Err(e) => {
                println!("Erro ao carregar FEN: {}", e);
            }
        }
        println!();
    }
}

fn show_moves(pos: &Position) {
    println!("Jogador a mover: {:?}", pos.side_to_move);
    if in_check(&pos.board, pos.side_to_move) {
        println!("Rei em xeque");
    }

    let start = Instant::now();
    let moves = legal_moves(pos);
    println!("Movimentos legais: {} ({}μs)", moves.len(), start.elapsed().as_micros());

    let preview: Vec<String> = moves.iter().take(8).map(|mv| mv.to_string()).collect();
    println!("Primeiros movimentos: {}", preview.join(" "));

    let start = Instant::now();
    let nodes = perft(pos, 3);
    println!("Perft(3): {} nós em {}ms", nodes, start.elapsed().as_millis());
}

fn run_search(pos: &Position, config: &SearchConfig) {
    let mut searcher = Searcher::new(config.clone());
    let result = searcher.search(pos);

    match result.best_move {
        Some(best_move) => {
            println!("Melhor movimento: {}", best_move);
            println!("   Score: {} centipawns", result.score);
            println!("   Profundidade: {}", result.depth);
            println!("   Nós: {}", result.nodes_searched);
            println!("   Tempo: {}ms", result.time_elapsed.as_millis());
            println!("   TT: {} entradas, hit rate {:.1}%", searcher.tt().len(), searcher.tt().hit_rate() * 100.0);
        }
        None => println!("Nenhum movimento legal"),
    }

    let dispatcher = match RootDispatcher::new(config.clone()) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            println!("Configuração inválida: {}", e);
            return;
        }
    };

    let start = Instant::now();
    match dispatcher.best_move(pos, 3) {
        Ok(Some(choice)) => println!(
            "Paralelo ({} threads, depth 3): {} score {} (brancas) em {}ms",
            config.threads,
            choice.mv,
            choice.score,
            start.elapsed().as_millis()
        ),
        Ok(None) => println!("Paralelo: nenhum movimento legal"),
        Err(e) => println!("Paralelo falhou: {}", e),
    }
}
