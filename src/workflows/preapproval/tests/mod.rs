mod common;
mod resolution;
