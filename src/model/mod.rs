// src/model/mod.rs

pub mod network;
pub mod stock;
