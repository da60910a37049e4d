pub mod alpha_beta;
pub mod evaluation;
pub mod move_ordering;
pub mod parallel_search;
pub mod quiescence;
pub mod transposition;

pub use alpha_beta::*;
pub use evaluation::*;
pub use move_ordering::*;
pub use parallel_search::*;
pub use transposition::*;

use crate::core::Move;
use crate::error::ConfigError;
use std::time::Duration;

pub type Score = i32;
pub type Depth = u8;

/// Score de mate (sem ajuste por distância), do ponto de vista de quem está mate: -MATE_SCORE.
pub const MATE_SCORE: Score = 999_999;
/// Janela "infinita": maior que qualquer score possível.
pub const INF: Score = 9_999_999;

/// Parâmetros da busca.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Profundidade máxima do aprofundamento iterativo (ou fixa no despacho paralelo).
    pub max_depth: Depth,
    /// Orçamento de tempo (None = sem limite).
    pub time_budget: Option<Duration>,
    /// Orçamento de nós folha por busca (None = sem limite).
    pub node_budget: Option<u64>,
    /// Profundidade máxima da quiescence (0 desliga a extensão).
    pub quiescence_depth: Depth,
    /// Workers do despacho paralelo na raiz.
    pub threads: usize,
    /// Capacidade da tabela de transposição, em entradas.
    pub tt_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            time_budget: Some(Duration::from_secs(5)),
            node_budget: None,
            quiescence_depth: 3,
            threads: num_cpus::get().max(1),
            tt_capacity: 1 << 20,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(mut self, depth: Depth) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_node_budget(mut self, budget: Option<u64>) -> Self {
        self.node_budget = budget;
        self
    }

    pub fn with_quiescence_depth(mut self, depth: Depth) -> Self {
        self.quiescence_depth = depth;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_tt_capacity(mut self, capacity: usize) -> Self {
        self.tt_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.tt_capacity == 0 {
            return Err(ConfigError::ZeroTableCapacity);
        }
        Ok(())
    }
}

/// Resultado da busca
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// None apenas quando não há lances legais (mate ou afogamento).
    pub best_move: Option<Move>,
    /// Score do ponto de vista de quem joga.
    pub score: Score,
    /// Última profundidade que contribuiu com um lance (completa ou parcial).
    pub depth: Depth,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
}

/// Contador de nós com orçamento opcional.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeCounter {
    pub nodes: u64,
    pub budget: Option<u64>,
}

impl NodeCounter {
    pub fn new(budget: Option<u64>) -> Self {
        NodeCounter { nodes: 0, budget }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.nodes += 1;
    }

    /// Orçamento esgotado: mais nós contados do que o permitido.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.budget.is_some_and(|limit| self.nodes > limit)
    }
}

/// Verifica se o score indica mate.
#[inline]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_SCORE
}
