// src/optimizer/mod.rs

pub mod balance;
pub mod engine;
pub mod transfers;
