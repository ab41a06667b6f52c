//! Ratatui front end split across logical submodules: the central state
//! machine (`app`), draft forms and confirmation state (`forms`), per-screen
//! state holders (`screens`), the shared remote view shape (`remote`),
//! layout helpers (`helpers`), and the terminal runtime (`terminal`).

mod app;
mod forms;
mod helpers;
mod remote;
mod screens;
mod terminal;

pub use app::App;
pub use remote::RemoteView;
pub use terminal::run_app;
