pub mod ludo;
pub mod session;
pub mod simulation;
