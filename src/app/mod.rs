// Application layer: wires CLI subcommands to the core helpers.

pub mod commands;
