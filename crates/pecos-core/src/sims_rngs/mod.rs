pub mod chacha_rng;
pub mod choices;
pub mod sim_rng;
pub mod xoshiro_rng;
