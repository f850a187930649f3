// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the resolved configuration, the current hand
//! angles, and the tilt state machine. Animation ticks refresh the hand
//! angles from the wall clock and advance the spring-back; pointer events
//! from the face drive the tilt directly.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use std::time::Instant;

use iced::{window, Element, Subscription, Task, Theme};

use crate::clock::HandAngles;
use crate::config::{self, Config};
use crate::ui::clock_face::FaceEvent;
use crate::ui::design_tokens::sizing;
use crate::ui::state::TiltState;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    config: Config,
    angles: HandAngles,
    tilt: TiltState,
    /// Instant of the latest animation tick; the view renders the tilt
    /// as of this moment.
    now: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            angles: HandAngles::now(),
            tilt: TiltState::default(),
            now: Instant::now(),
        }
    }
}

/// Builds the window settings: a square window sized for the dial.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_DEFAULT, sizing::WINDOW_DEFAULT),
        min_size: Some(iced::Size::new(sizing::WINDOW_MIN, sizing::WINDOW_MIN)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the settings file and any
    /// command-line overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            log::warn!("failed to load settings: {err}");
            Config::default()
        });

        log::info!("starting MiClock");

        let mut app = App {
            config,
            ..Self::default()
        };

        if let Some(background) = flags.background {
            if config::parse_color(&background).is_some() {
                app.config.background_color = Some(background);
            } else {
                log::warn!("ignoring invalid background override {background:?}");
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("MiClock")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                self.angles = HandAngles::now();
                self.tilt.tick(now);
            }
            Message::Face(FaceEvent::Pressed(tilt)) => {
                self.tilt.press(tilt);
            }
            Message::Face(FaceEvent::Released) => {
                self.now = Instant::now();
                self.tilt.release(self.now);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            config: &self.config,
            angles: self.angles,
            tilt: self.tilt.current(self.now),
        })
    }
}
