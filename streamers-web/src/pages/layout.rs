use crate::Route;
use dioxus::prelude::*;
use streamers_ui::AppLayoutView;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        AppLayoutView {
            title: "Br Dev Streamers".to_string(),
            subtitle: "Somos todos uma comunidade".to_string(),
            Outlet::<Route> {}
        }
    }
}
