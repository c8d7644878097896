//! Coordinate types shared by every part of the engine

pub mod cartesian;

pub use cartesian::Cartesian3;
