//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

/// Shared 24x24 stroked svg frame
#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// Layout grid icon (mosaic toggle)
#[component]
pub fn GridIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect { x: "3", y: "3", width: "7", height: "7", rx: "1" }
            rect { x: "14", y: "3", width: "7", height: "7", rx: "1" }
            rect { x: "14", y: "14", width: "7", height: "7", rx: "1" }
            rect { x: "3", y: "14", width: "7", height: "7", rx: "1" }
        }
    }
}

/// Coffee cup icon ("feeling lucky")
#[component]
pub fn CoffeeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M10 2v2" }
            path { d: "M14 2v2" }
            path { d: "M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1" }
            path { d: "M6 2v2" }
        }
    }
}

/// Refresh icon (circular arrows)
#[component]
pub fn RefreshIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

/// Eye icon (viewer count)
#[component]
pub fn EyeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

/// Image placeholder icon
#[component]
pub fn ImageIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
        }
    }
}

/// Checkmark icon
#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

/// Plus icon
#[component]
pub fn PlusIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}

/// X (close) icon
#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
