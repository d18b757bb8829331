//! Detached block module - cleared blocks still falling before removal
//!
//! Every block moves on its own trajectory; blocks never collide with each
//! other here. Deciding when a block is gone is the merge collaborator's job,
//! which replaces the whole collection through `UpdateDetached`.

use crate::falling::advance_y;
use crate::types::{DetachedBlock, BLOCK_FLOOR};

/// One block after `elapsed_ms` of gravity
pub fn advance_block(block: &DetachedBlock, elapsed_ms: u32) -> DetachedBlock {
    DetachedBlock {
        y: advance_y(block.y, block.speed, elapsed_ms, BLOCK_FLOOR),
        ..*block
    }
}

/// Every block after `elapsed_ms` of gravity, order preserved
pub fn advance_all(blocks: &[DetachedBlock], elapsed_ms: u32) -> Vec<DetachedBlock> {
    blocks
        .iter()
        .map(|block| advance_block(block, elapsed_ms))
        .collect()
}

/// Number of head blocks still in flight
pub fn head_count(blocks: &[DetachedBlock]) -> usize {
    blocks.iter().filter(|block| block.head).count()
}
