use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(run_agent_client::App);
}
