// Library exports for the Battlesnake bot
// The server binary and the replay tool both build on these modules

pub mod bot;
pub mod collision;
pub mod config;
pub mod debug_logger;
pub mod reachability;
pub mod replay;
pub mod safety;
pub mod selector;
pub mod types;
