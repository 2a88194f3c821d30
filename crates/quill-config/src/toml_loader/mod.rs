//! Reading `config.toml`, and writing the commented default on first run.

mod loader;
mod template;


pub use loader::{
    default_config_path, load_default, load_from_path, load_or_create, parse_config,
    write_default_config,
};
