//! Root application component

use dioxus::prelude::*;

use crate::pages::Landing;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Flowt - AI Meets Accounting" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        Landing {}
    }
}
