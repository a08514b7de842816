use super::sim_rng::SimRng;

pub use rand_chacha::{ChaCha12Rng, ChaCha20Rng, ChaCha8Rng};

impl SimRng for ChaCha8Rng {}
impl SimRng for ChaCha12Rng {}
impl SimRng for ChaCha20Rng {}
