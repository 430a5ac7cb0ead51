#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use fltk::{app, prelude::*};
use tracing::info;

use plain_pad::app::infrastructure::logging::init_logging;
use plain_pad::app::{AppState, Message};
use plain_pad::ui::main_window::build_main_window;
use plain_pad::ui::menu::build_menu;
use plain_pad::ui::view::FltkView;

fn main() {
    init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "starting PlainPad");

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);
    widgets.wind.show();

    let mut state = AppState::new(FltkView::new(widgets, sender));

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                app.quit();
            }
        }
    }

    info!("exiting");
}
