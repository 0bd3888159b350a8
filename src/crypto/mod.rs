pub mod sealer;

pub use sealer::TokenSealer;
