#![allow(dead_code)]

pub mod fixtures;
pub mod image_server;
