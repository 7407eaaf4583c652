pub mod board;
pub mod mv;
pub mod piece;
pub mod rules;
pub mod session;
pub mod square;
