#![allow(warnings)]
//! Shelf Life Frontend Entry Point

mod app;
mod chart;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod lifecycle;
mod logger;
mod models;
mod notify;
mod offline;
mod scanner;
mod storage;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    log::info!("starting Shelf Life");
    mount_to_body(App);
}
