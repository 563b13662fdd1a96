pub mod controller;
pub mod inventory;

pub use controller::{MoveIntent, Player};
pub use inventory::Inventory;
