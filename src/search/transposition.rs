use fxhash::FxHashMap as HashMap;
use super::{Depth, Score};
use tracing::trace;

// Tipos de entrada na TT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,       // Valor exato (PV-node)
    LowerBound,  // Fail-high (Cut-node)
    UpperBound,  // Fail-low (All-node)
}

// Entrada da Transposition Table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: Depth,
    pub score: Score,
    pub bound: Bound,
}

impl TTEntry {
    /// Aplica a entrada a um nó com profundidade `depth` e janela (alpha, beta).
    /// Devolve o score quando a entrada resolve o nó; caso contrário aperta a janela.
    pub fn cutoff(&self, depth: Depth, alpha: &mut Score, beta: &mut Score) -> Option<Score> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            Bound::Exact => return Some(self.score),
            Bound::LowerBound => *alpha = (*alpha).max(self.score),
            Bound::UpperBound => *beta = (*beta).min(self.score),
        }
        if *alpha >= *beta {
            Some(self.score)
        } else {
            None
        }
    }
}

/// Classifica o score de um nó em relação à janela original.
pub fn classify_bound(score: Score, alpha: Score, beta: Score) -> Bound {
    if score <= alpha {
        Bound::UpperBound
    } else if score >= beta {
        Bound::LowerBound
    } else {
        Bound::Exact
    }
}

/// Transposition Table para cache de posições durante o search.
/// Pertence a uma instância do motor; depth-preferred replacement com capacidade limitada.
pub struct TranspositionTable {
    table: HashMap<u64, TTEntry>,
    hits: u64,
    misses: u64,
    max_capacity: usize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_capacity(1 << 20)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        TranspositionTable {
            // Reserva só uma parte: a tabela cresce conforme o uso
            table: HashMap::with_capacity_and_hasher(capacity.min(1 << 16), Default::default()),
            hits: 0,
            misses: 0,
            max_capacity: capacity,
        }
    }

    /// Busca uma posição na TT
    pub fn lookup(&mut self, hash: u64) -> Option<TTEntry> {
        match self.table.get(&hash) {
            Some(&entry) => {
                self.hits += 1;
                Some(entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Armazena uma posição na TT, classificando o bound pela janela (alpha, beta) original.
    pub fn store(&mut self, hash: u64, depth: Depth, score: Score, alpha: Score, beta: Score) {
        let entry = TTEntry {
            depth,
            score,
            bound: classify_bound(score, alpha, beta),
        };

        // Depth-preferred replacement
        if let Some(existing) = self.table.get_mut(&hash) {
            if depth >= existing.depth {
                *existing = entry;
            }
            return;
        }

        if self.table.len() >= self.max_capacity {
            self.clear_old_entries();
        }
        self.table.insert(hash, entry);
    }

    /// Remove o quarto mais raso da tabela (pelo menos uma entrada).
    fn clear_old_entries(&mut self) {
        let mut entries_by_depth: Vec<(u64, Depth)> = self.table
            .iter()
            .map(|(&hash, entry)| (hash, entry.depth))
            .collect();

        // Ordena por profundidade (menores primeiro)
        entries_by_depth.sort_unstable_by_key(|&(_, depth)| depth);

        let remove_count = (self.table.len() / 4).max(1);
        for (hash, _) in entries_by_depth.into_iter().take(remove_count) {
            self.table.remove(&hash);
        }
        trace!(removed = remove_count, remaining = self.table.len(), "tt eviction");
    }

    /// Limpa a TT para novo jogo
    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Estatísticas da TT
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 { 0.0 }
        else { self.hits as f64 / total as f64 }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_capacity
    }

    /// Hashfull: percentual de ocupação da TT (0-1000)
    pub fn hashfull(&self) -> u64 {
        (self.len() as u64 * 1000) / self.capacity() as u64
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_classifies_bounds() {
        let mut tt = TranspositionTable::with_capacity(16);
        tt.store(1, 3, 10, 0, 50);
        tt.store(2, 3, 60, 0, 50);
        tt.store(3, 3, -5, 0, 50);
        assert_eq!(tt.lookup(1).unwrap().bound, Bound::Exact);
        assert_eq!(tt.lookup(2).unwrap().bound, Bound::LowerBound);
        assert_eq!(tt.lookup(3).unwrap().bound, Bound::UpperBound);
        assert_eq!(tt.lookup(4), None);
        assert_eq!((tt.hits(), tt.misses()), (3, 1));
    }

    #[test]
    fn cutoff_respects_depth_and_window() {
        let exact = TTEntry { depth: 4, score: 25, bound: Bound::Exact };
        let (mut a, mut b) = (-100, 100);
        assert_eq!(exact.cutoff(5, &mut a, &mut b), None);
        assert_eq!(exact.cutoff(4, &mut a, &mut b), Some(25));

        // Lower bound aperta alpha; só corta se a janela fechar
        let lower = TTEntry { depth: 4, score: 40, bound: Bound::LowerBound };
        let (mut a, mut b) = (-100, 100);
        assert_eq!(lower.cutoff(2, &mut a, &mut b), None);
        assert_eq!((a, b), (40, 100));
        let (mut a, mut b) = (-100, 30);
        assert_eq!(lower.cutoff(2, &mut a, &mut b), Some(40));

        let upper = TTEntry { depth: 4, score: -40, bound: Bound::UpperBound };
        let (mut a, mut b) = (-100, 100);
        assert_eq!(upper.cutoff(2, &mut a, &mut b), None);
        assert_eq!((a, b), (-100, -40));
        let (mut a, mut b) = (-20, 100);
        assert_eq!(upper.cutoff(2, &mut a, &mut b), Some(-40));
    }

    #[test]
    fn shallower_result_does_not_replace_deeper() {
        let mut tt = TranspositionTable::with_capacity(16);
        tt.store(7, 5, 100, -1000, 1000);
        tt.store(7, 2, -300, -1000, 1000);
        assert_eq!(tt.lookup(7).unwrap().score, 100);
        tt.store(7, 6, -300, -1000, 1000);
        assert_eq!(tt.lookup(7).unwrap().depth, 6);
    }

    #[test]
    fn zobrist_keys_index_the_table() {
        // Chaves reais de posições distintas convivem sem colisão
        let mut tt = TranspositionTable::with_capacity(64);
        let start = crate::core::Position::new();
        let hashes = [
            start.hash(),
            start.apply_move(crate::core::Move::new(12, 28)).hash(),
            start.apply_move(crate::core::Move::new(6, 21)).hash(),
        ];
        for (i, &hash) in hashes.iter().enumerate() {
            tt.store(hash, 1, i as Score, -1000, 1000);
        }
        for (i, &hash) in hashes.iter().enumerate() {
            assert_eq!(tt.lookup(hash).map(|e| e.score), Some(i as Score));
        }
        assert_eq!(tt.len(), 3);
    }

    #[test]
    fn capacity_is_bounded() {
        let mut tt = TranspositionTable::with_capacity(8);
        for hash in 0..100u64 {
            tt.store(hash, (hash % 5) as Depth, 0, -1, 1);
        }
        assert!(tt.len() <= 8);
        assert!(tt.hashfull() <= 1000);
        tt.clear();
        assert!(tt.is_empty());
    }
}
