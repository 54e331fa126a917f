pub mod asset;
pub mod creative;
pub mod draw;
pub mod generate;
pub mod geometry;
pub mod logging;
pub mod manifest;
pub mod palette;
pub mod professional;
pub mod resize;
pub mod text;
pub mod verify;
