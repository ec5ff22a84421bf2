mod drag_event_handler;
mod drag_move_handler;
mod drag_start_handler;
mod drag_stop_handler;
mod layout_changed_handler;
mod screen_handler;
mod window_close_handler;
mod zone_resolver;

use super::DragEvent;
use super::config::Config;
use super::display_action::DisplayAction;
use super::display_servers::DisplayServer;
use super::models::{DragMode, Manager, Rect, Screen, SnapResult};
