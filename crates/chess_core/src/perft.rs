use crate::{board::GameState, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(state, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            state.make_move(mv);
            nodes += inner(state, depth - 1, rest);
            state.undo_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}

/// Node counts below each root move, for tracking down generator mismatches.
pub fn perft_divide(state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(state, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            state.make_move(mv);
            let nodes = perft(state, depth - 1);
            state.undo_move();
            (mv, nodes)
        })
        .collect()
}
