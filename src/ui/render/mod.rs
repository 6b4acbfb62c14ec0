mod all;
mod body;
mod footer;
mod log;

use self::log::log;
use super::*;
use footer::footer;

pub use all::all as render;
pub use body::body;
