use std::collections::VecDeque;

use anyhow::Result;
use gridbench_core::Grid;

const FILL: u8 = 4;

/// Fill every background region that cannot reach the border
pub fn solve(input: &Grid) -> Result<Grid> {
    let (h, w) = input.dims();
    let mut open = vec![false; h * w];
    let mut queue: VecDeque<(usize, usize)> = input
        .cells()
        .filter(|&((r, c), v)| v == 0 && (r == 0 || c == 0 || r + 1 == h || c + 1 == w))
        .map(|(pos, _)| pos)
        .collect();
    for &(r, c) in &queue {
        open[r * w + c] = true;
    }

    while let Some((r, c)) = queue.pop_front() {
        let neighbors = [
            (r.wrapping_sub(1), c),
            (r + 1, c),
            (r, c.wrapping_sub(1)),
            (r, c + 1),
        ];
        for (nr, nc) in neighbors {
            if input.get(nr, nc) == Some(0) && !open[nr * w + nc] {
                open[nr * w + nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    let mut out = input.clone();
    for ((r, c), v) in input.cells() {
        if v == 0 && !open[r * w + c] {
            out.set(r, c, FILL)?;
        }
    }
    Ok(out)
}
