use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div { class: "app-header-inner",
                    div {
                        h1 { class: "app-title", "📊 {APP_NAME}" }
                        p { class: "app-subtitle", "Precios del marketplace por ciudad, sin dependencias externas de nombres." }
                    }
                    span { class: "app-version", "{version_label()}" }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}
