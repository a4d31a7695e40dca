use dioxus::prelude::*;
use ui::MigrateApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/migrate")]
    Migrate {},
}

#[component]
fn Home() -> Element {
    rsx! {
        MigrateApp {}
    }
}

#[component]
fn Migrate() -> Element {
    rsx! {
        MigrateApp {}
    }
}
