use crate::Route;
use dioxus::prelude::*;
use streamers_ui::AppLayoutView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        AppLayoutView {
            title: "Br Dev Streamers".to_string(),
            subtitle: "Somos todos uma comunidade".to_string(),
            div { class: "flex flex-col items-center justify-center py-24 text-gray-400 gap-4",
                p { "Página não encontrada: /{path}" }
                Link { to: Route::Home {}, class: "text-white underline", "Voltar para as lives" }
            }
        }
    }
}
