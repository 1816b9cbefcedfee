//! Linked piles: the stack used for the center and earned piles, and the
//! queue used for the draw pile. Both sit on the same node chain.

mod chain;
mod queue;
mod stack;

pub use chain::Iter;
pub use queue::Queue;
pub use stack::Stack;
