mod backend;
mod frontend;
mod utils;

use crate::backend::storage::{FileStorage, MemoryStorage, Storage};
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::paths::get_app_dir;
use crate::frontend::app::routes::{Route, table};
use crate::frontend::services::session::Session;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::rc::Rc;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    utils::logging::init(&config.logging.filter);
    if let Err(e) = &loaded {
        log::error!("Failed to load config, using defaults: {e}");
    }

    for record in table() {
        log::debug!(
            "Route {} name={:?} redirect={:?} requires_auth={}",
            record.path,
            record.name,
            record.redirect,
            record.meta.requires_auth
        );
    }

    let size = LogicalSize::new(f64::from(config.window.width), f64::from(config.window.height));
    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.window.title.as_str())
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(config.window.resizable),
        )
        .with_menu(None);

    let _ = CONFIG.set(config);

    LaunchBuilder::new().with_cfg(window).launch(AppRoot);
}

/// Opens the persistent store, falling back to memory if it cannot be read.
fn open_storage(config: &AppConfig) -> Rc<dyn Storage> {
    let path = match get_app_dir() {
        Ok(dir) => dir.join(&config.storage.file_name),
        Err(e) => {
            log::warn!("No app directory, session will not persist: {e}");
            return Rc::new(MemoryStorage::new());
        }
    };

    match FileStorage::open(&path) {
        Ok(storage) => {
            log::info!("Using storage at {}", storage.path().display());
            Rc::new(storage)
        }
        Err(e) => {
            log::error!("Failed to open storage at {}: {e}", path.display());
            Rc::new(MemoryStorage::new())
        }
    }
}

#[component]
fn AppRoot() -> Element {
    use_context_provider(|| {
        let config = CONFIG.get_or_init(AppConfig::default);
        Session::new(open_storage(config))
    });

    rsx! { Router::<Route> {} }
}
