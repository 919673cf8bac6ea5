pub mod paths;

pub use paths::expand_tilde;
