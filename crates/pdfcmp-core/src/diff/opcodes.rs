use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Equal,
    Replace,
    /// Present in `a` only.
    Delete,
    /// Present in `b` only.
    Insert,
}

/// One aligned run: `a[a_range]` corresponds to `b[b_range]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: DiffTag,
    pub a_range: Range<usize>,
    pub b_range: Range<usize>,
}

/// A maximal run of equal elements: `a[a..a + len] == b[b..b + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    len: usize,
}

/// Align two sequences into ordered equal/replace/delete/insert runs.
///
/// Recursively anchors on the longest common contiguous run (earliest in `a`,
/// then earliest in `b`, on ties) and aligns what lies left and right of it.
/// The runs cover both sequences completely and in order.
pub fn opcodes<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let blocks = matching_blocks(a, b);

    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    for block in blocks {
        let tag = match (i < block.a, j < block.b) {
            (true, true) => Some(DiffTag::Replace),
            (true, false) => Some(DiffTag::Delete),
            (false, true) => Some(DiffTag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            out.push(Opcode {
                tag,
                a_range: i..block.a,
                b_range: j..block.b,
            });
        }
        i = block.a + block.len;
        j = block.b + block.len;
        if block.len > 0 {
            out.push(Opcode {
                tag: DiffTag::Equal,
                a_range: block.a..i,
                b_range: block.b..j,
            });
        }
    }
    out
}

/// Matching blocks in increasing order, adjacent blocks merged, terminated by
/// a zero-length sentinel at `(a.len(), b.len())`.
fn matching_blocks<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Block> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo..ahi, blo..bhi);
        if block.len == 0 {
            continue;
        }
        found.push(block);
        if alo < block.a && blo < block.b {
            pending.push((alo, block.a, blo, block.b));
        }
        let (a_end, b_end) = (block.a + block.len, block.b + block.len);
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
    }
    found.sort_by_key(|blk| (blk.a, blk.b));

    let mut merged: Vec<Block> = Vec::with_capacity(found.len() + 1);
    for block in found {
        match merged.last_mut() {
            Some(last) if last.a + last.len == block.a && last.b + last.len == block.b => {
                last.len += block.len;
            }
            _ => merged.push(block),
        }
    }
    merged.push(Block {
        a: a.len(),
        b: b.len(),
        len: 0,
    });
    merged
}

/// Longest common contiguous run inside the given windows.
fn longest_match<T: PartialEq>(
    a: &[T],
    b: &[T],
    a_window: Range<usize>,
    b_window: Range<usize>,
) -> Block {
    let mut best = Block {
        a: a_window.start,
        b: b_window.start,
        len: 0,
    };
    // run[j + 1] = length of the common run ending at a[i], b[j]
    let width = b_window.end - b_window.start;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in a_window {
        for (k, j) in b_window.clone().enumerate() {
            curr[k + 1] = if a[i] == b[j] { prev[k] + 1 } else { 0 };
            if curr[k + 1] > best.len {
                best = Block {
                    a: i + 1 - curr[k + 1],
                    b: j + 1 - curr[k + 1],
                    len: curr[k + 1],
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}
