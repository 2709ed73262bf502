//! Custom menu composition with icon decoration and current-page state.

mod composer;
mod lang;

pub use composer::{CustomMenu, MenuItem, MenuItemDisplay};
pub use lang::language_menu;
