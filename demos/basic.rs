//! Standalone demo: a glass card over a colorful backdrop.
//!
//! Click the card to switch theme; scroll up and down over it to change
//! the blur density.

use floem::prelude::*;
use floem::reactive::{SignalGet, SignalUpdate};
use floem::window::WindowConfig;
use floem_glass::{glass_container, StyleConfig, Theme, Tint};

fn main() {
    env_logger::init();

    let style = RwSignal::new(StyleConfig::default());
    let backdrop = Tint::from_hex("3A7BD5").unwrap().to_peniko();

    let card = glass_container(
        style,
        label(move || {
            let s = style.get();
            format!("{:?} · density {:.2}", s.theme(), s.density())
        })
        .style(|s| s.padding(24.0).font_size(16.0).color(Color::WHITE)),
    )
    .style(|s| s.width(280.0).height(160.0).items_center().justify_center())
    .on_click_stop(move |_| {
        style.update(|s| {
            let next = match s.theme() {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            };
            s.set_theme(next);
        });
    })
    .on_event_stop(floem::event::EventListener::PointerWheel, move |e| {
        if let floem::event::Event::PointerWheel(wheel) = e {
            let step = if wheel.delta.y < 0.0 { 0.05 } else { -0.05 };
            style.update(|s| {
                let density = s.density() + step;
                s.set_density(density);
            });
        }
    });

    floem::Application::new()
        .window(
            move |_| {
                container(card)
                    .style(move |s| {
                        s.size_full()
                            .items_center()
                            .justify_center()
                            .background(backdrop)
                    })
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 320.0))
                    .title("floem-glass"),
            ),
        )
        .run();
}
