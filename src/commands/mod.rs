pub mod divergence;
pub mod explore;
pub mod score;
