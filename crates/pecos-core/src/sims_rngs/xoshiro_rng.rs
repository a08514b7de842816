use super::sim_rng::SimRng;

pub use rand_xoshiro::{
    Xoshiro128PlusPlus, Xoshiro128StarStar, Xoshiro256PlusPlus, Xoshiro256StarStar,
    Xoshiro512PlusPlus, Xoshiro512StarStar,
};

impl SimRng for Xoshiro128PlusPlus {}
impl SimRng for Xoshiro128StarStar {}
impl SimRng for Xoshiro256PlusPlus {}
impl SimRng for Xoshiro256StarStar {}
impl SimRng for Xoshiro512PlusPlus {}
impl SimRng for Xoshiro512StarStar {}
