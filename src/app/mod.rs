// Application layer: CLI command execution and output rendering.

pub mod commands;
pub mod render;
