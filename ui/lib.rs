mod alert;
mod button;
mod form;
mod layout;
mod link;
mod menu;
mod pagination;
mod pill;
mod savebar;
mod side_nav;
mod skeleton;
mod tab_bar;
mod table;

pub use self::alert::*;
pub use self::button::*;
pub use self::form::*;
pub use self::layout::*;
pub use self::link::*;
pub use self::menu::*;
pub use self::pagination::*;
pub use self::pill::*;
pub use self::savebar::*;
pub use self::side_nav::*;
pub use self::skeleton::*;
pub use self::tab_bar::*;
pub use self::table::*;
