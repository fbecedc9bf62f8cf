#![allow(dead_code)]

pub mod fixtures;
pub mod messenger;
pub mod sources;
