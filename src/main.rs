use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod playback;
mod utils;

use components::PlayerShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#1f2933" }
        document::Title { "MediaDeck" }
        document::Stylesheet { href: APP_CSS }

        PlayerShell {}
    }
}
