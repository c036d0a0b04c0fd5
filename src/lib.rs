#![no_std]

extern crate alloc;

pub mod config;
pub mod pages;
pub mod reps;
pub mod ui;
