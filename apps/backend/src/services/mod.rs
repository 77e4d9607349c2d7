pub mod clock;
pub mod riddles;
