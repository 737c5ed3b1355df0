use crate::crypto::bit_block::BitBlock;

/// Observer hook for intermediate cipher state. Every callback has an empty
/// default body, so an observer implements only the stages it cares about.
///
/// This replaces ad-hoc printing of intermediate values: tracing is opt-in,
/// structured, and carries no global state.
pub trait TraceObserver {
    fn on_round_key(&self, _round: usize, _key: &BitBlock) {}
    fn on_initial_permutation(&self, _block: &BitBlock) {}
    fn on_round(&self, _round: usize, _left: &BitBlock, _right: &BitBlock) {}
    fn on_final_permutation(&self, _block: &BitBlock) {}
}

/// Forwards every stage to the `log` facade: permutations at debug level,
/// per-round state and round keys at trace level.
pub struct LogTracer;

impl TraceObserver for LogTracer {
    fn on_round_key(&self, round: usize, key: &BitBlock) {
        log::trace!("K{round}: {}", key.to_hex());
    }

    fn on_initial_permutation(&self, block: &BitBlock) {
        log::debug!("after IP: {}", block.to_hex());
    }

    fn on_round(&self, round: usize, left: &BitBlock, right: &BitBlock) {
        log::trace!("round {round}: L={} R={}", left.to_hex(), right.to_hex());
    }

    fn on_final_permutation(&self, block: &BitBlock) {
        log::debug!("after FP: {}", block.to_hex());
    }
}
