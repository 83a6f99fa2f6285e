use tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let _ = dioxus::logger::init(level);
    dioxus::launch(streamers_web::App);
}
