use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod reservation;
mod search;
mod sort;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#c0392b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Denmoku Songs" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
