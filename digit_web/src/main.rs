use digit_core::pointer::{
    AUXILIARY_BUTTON, FIFTH_BUTTON, FOURTH_BUTTON, PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use digit_core::{classify, Classification, ClassificationClient, DrawingSurface, PointerInput};
use dioxus::html::input_data::{MouseButton, MouseButtonSet};
// The prelude brings all the essential Dioxus items into scope.
use dioxus::prelude::*;

// Dioxus reports held buttons as a set; the surface wants the DOM bitmask.
fn button_mask(held: MouseButtonSet) -> u16 {
    held.iter().fold(0, |mask, button| {
        mask | match button {
            MouseButton::Primary => PRIMARY_BUTTON,
            MouseButton::Secondary => SECONDARY_BUTTON,
            MouseButton::Auxiliary => AUXILIARY_BUTTON,
            MouseButton::Fourth => FOURTH_BUTTON,
            MouseButton::Fifth => FIFTH_BUTTON,
            MouseButton::Unknown => 0,
        }
    })
}

fn pointer_input(evt: &MouseEvent) -> PointerInput {
    let at = evt.element_coordinates();
    PointerInput::new(at.x, at.y, button_mask(evt.held_buttons()))
}

/// The main application component.
#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        main {
            class: "min-h-screen bg-slate-900 flex items-center justify-center",
            DigitPad {}
        }
    }
}

#[allow(non_snake_case)]
fn DigitPad() -> Element {
    let mut surface = use_signal(DrawingSurface::default);
    let classification = use_signal(Classification::default);
    let client = use_hook(ClassificationClient::from_env);

    let (width, height, scale) = {
        let surface = surface.read();
        let config = surface.config();
        (config.width, config.height, config.scale)
    };
    let css_width = f64::from(width) * scale;
    let css_height = f64::from(height) * scale;

    // Only inked pixels get a rect; the black backdrop covers the rest.
    let ink: Vec<(u32, u32, f64)> = surface
        .read()
        .buffer()
        .pixels()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value > 0)
        .map(|(i, &value)| {
            let i = i as u32;
            (i % width, i / width, f64::from(value) / 255.0)
        })
        .collect();

    let result = classification.read().result().map(str::to_string);
    let error = classification.read().error().map(str::to_string);

    // Each click fires its own request; nothing waits on or cancels another.
    let read = move |_: MouseEvent| {
        let image = surface.read().extract();
        log::info!("Reading {} pixels from the canvas", image.len());
        let client = client.clone();
        let mut classification = classification;
        spawn(async move {
            classification.set(classify(&client, &image).await);
        });
    };

    rsx! {
        div { class: "bg-slate-800/40 border border-slate-700/50 rounded-xl p-6 flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold text-white", "Draw a digit" }

            svg {
                class: "border border-slate-600 rounded-md cursor-crosshair",
                width: "{css_width}",
                height: "{css_height}",
                view_box: "0 0 {width} {height}",
                shape_rendering: "crispEdges",

                onmousedown: move |evt| {
                    evt.prevent_default();
                    surface.write().pointer_down(pointer_input(&evt));
                },
                onmousemove: move |evt| {
                    surface.write().pointer_move(pointer_input(&evt));
                },
                onmouseup: move |evt| surface.write().pointer_up(pointer_input(&evt)),
                onmouseleave: move |evt| {
                    surface.write().pointer_leave(pointer_input(&evt));
                },
                onmouseenter: move |evt| {
                    surface.write().pointer_enter(pointer_input(&evt));
                },

                // Keep the svg itself as the event target so offsets stay element-relative.
                g { style: "pointer-events: none",
                    rect { x: "0", y: "0", width: "{width}", height: "{height}", fill: "black" }
                    for (x, y, opacity) in ink {
                        rect {
                            key: "{x}-{y}",
                            x: "{x}",
                            y: "{y}",
                            width: "1",
                            height: "1",
                            fill: "white",
                            fill_opacity: "{opacity}"
                        }
                    }
                }
            }

            div { class: "flex gap-2",
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white font-semibold rounded-lg hover:bg-indigo-700",
                    onclick: read,
                    "Read"
                }
                button {
                    class: "px-4 py-2 bg-slate-600 text-white font-semibold rounded-lg hover:bg-slate-500",
                    onclick: move |_| surface.write().clear(),
                    "Clear"
                }
            }

            if let Some(label) = result {
                p { class: "text-green-400 text-xl", "Result: {label}" }
            }
            if let Some(message) = error {
                p { class: "text-red-400", "Error: {message}" }
            }
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    launch(App);
}
