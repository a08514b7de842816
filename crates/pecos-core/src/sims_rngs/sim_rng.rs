use rand::{RngCore, SeedableRng};

/// Marker trait for the PRNGs PECOS simulators are allowed to use.
///
/// Carries no methods of its own — it exists so simulator types can write a
/// single bound (`R: SimRng`) instead of repeating `RngCore + SeedableRng`
/// everywhere, and so a simulator can be generic over which concrete PRNG
/// backs it without caring which one as long as it's one of these.
pub trait SimRng: RngCore + SeedableRng {}
