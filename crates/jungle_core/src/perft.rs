use crate::{position::Position, rules::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all positions reachable in exactly `depth` plies; decided games are
/// leaves wherever they occur.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    fn inner(pos: &Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || pos.is_terminal() {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = pos.clone();
            child.apply_move(mv);
            nodes += inner(&child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(pos, depth, &mut layers[..])
}
