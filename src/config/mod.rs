pub mod profile;

pub use profile::ProfileConfig;
