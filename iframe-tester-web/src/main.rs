use iframe_tester_web::App;

fn main() {
    // Routes tracing events to the browser console
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}
