#![allow(dead_code)]

pub mod ctfd_server;
pub mod sink;
