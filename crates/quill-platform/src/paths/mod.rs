mod resolve;

pub use resolve::default_export_dir;
