#![doc = include_str!("../README.md")]

mod consistency;
pub mod document;
mod interval;
mod time;

pub use self::{
    consistency::{Consistency, Inconsistency, InvalidTolerance},
    interval::{TimeInterval, TimeIntervalSequence},
    time::Time,
};
