//! Flat scaffolding artifacts: created once, then left to the user.

mod go_mod;
mod main_go;
mod repository_go;

pub use go_mod::GoMod;
pub use main_go::MainGo;
pub use repository_go::RepositoryGo;
