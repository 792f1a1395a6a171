pub mod aggregate;

pub use aggregate::{ProLabore, ProLaboreDto, ProLaboreForm};
