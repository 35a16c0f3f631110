//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod results;
mod search_form;
mod settings;
mod song_list;
mod song_row;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use results::*;
pub use search_form::*;
pub use settings::*;
pub use song_list::*;
pub use song_row::*;
