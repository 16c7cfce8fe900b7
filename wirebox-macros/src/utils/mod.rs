mod upper_snake;

pub use upper_snake::upper_snake;
