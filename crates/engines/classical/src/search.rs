//! Negamax search with alpha-beta pruning

use chess_core::{legal_moves_into, GameState, Move, SearchLimits, StopSignal};

use crate::eval::{evaluate, PIECE_VALUES};

/// Score of being checkmated at the root; mates further away score closer to zero.
pub const MATE_SCORE: i32 = 100_000;

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move and its score, if at least one root move was fully searched
    pub best_move: Option<(Move, i32)>,
    /// True if search was stopped early (cancelled or out of time)
    pub stopped: bool,
}

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `state` - The position to search
/// * `moves` - Legal moves for `state`; the answer is always one of them
/// * `limits` - Depth bound and stop signal
/// * `nodes` - Counter for nodes searched (for statistics)
pub fn pick_best_move(
    state: &GameState,
    moves: &[Move],
    limits: &SearchLimits,
    nodes: &mut u64,
) -> SearchOutcome {
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }

    let mut tmp = state.clone();
    let mut ordered = moves.to_vec();
    order_moves(&mut ordered);

    let depth = limits.depth.max(1);
    let beta = MATE_SCORE + 1;
    let mut alpha = -beta;
    let mut best: Option<(Move, i32)> = None;
    let mut stopped = false;

    for mv in ordered {
        // Check the stop flag before starting each root move
        if limits.should_stop() {
            stopped = true;
            break;
        }

        tmp.make_move(mv);
        *nodes += 1;
        let (score, was_stopped) = negamax(&mut tmp, depth - 1, 1, -beta, -alpha, nodes, &limits.stop);
        tmp.undo_move();

        if was_stopped {
            stopped = true;
            break;
        }

        let score = -score;
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    SearchOutcome {
        best_move: best,
        stopped,
    }
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Returns (score, stopped) where stopped indicates the search was aborted.
fn negamax(
    state: &mut GameState,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
    stop: &StopSignal,
) -> (i32, bool) {
    if stop.should_check(*nodes) && stop.check_time() {
        return (0, true);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(state, &mut moves);

    if moves.is_empty() {
        if state.is_king_attacked(state.side_to_move) {
            return (-(MATE_SCORE - ply), false); // Checkmate
        }
        return (0, false); // Stalemate
    }

    if depth == 0 {
        return (evaluate(state), false);
    }

    order_moves(&mut moves);
    let mut best = -MATE_SCORE - 1;

    for mv in moves {
        state.make_move(mv);
        *nodes += 1;
        let (score, stopped) = negamax(state, depth - 1, ply + 1, -beta, -alpha, nodes, stop);
        state.undo_move();

        if stopped {
            return (best, true);
        }

        let score = -score;
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    (best, false)
}

/// Captures and promotions first, most valuable victim and cheapest attacker
/// leading. Quiet moves keep their generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(move_priority(mv)));
}

fn move_priority(mv: &Move) -> i32 {
    let mut p = 0;
    if let Some(victim) = mv.piece_captured {
        p += 10 * PIECE_VALUES[victim.kind.idx()] - PIECE_VALUES[mv.piece_moved.kind.idx()] / 10 + 10_000;
    }
    if let Some(promo) = mv.promotion {
        p += PIECE_VALUES[promo.idx()];
    }
    p
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
