mod carousel;
mod config;
mod contact;
mod content;
mod counter;
mod diagnostics;
mod effects;
mod hooks;
mod navigation;
mod page;
mod params;
mod portfolio;
mod radar;
mod rate_limit;
mod reveal;
mod routes;
mod skills;
mod theme;
mod timing;
mod typing;

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(routes::App);
}
