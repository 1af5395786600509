#[macro_use]
mod par;

pub mod alphabets;
pub mod codon;
pub mod config;
pub mod error;
pub mod seq;
