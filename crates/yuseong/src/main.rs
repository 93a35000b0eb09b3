use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use yuseong_config::Settings;
use yuseong_sky::MeteorShower;

mod view;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}

/// The main application which hosts the meteor shower component.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The shower component: configuration state machine plus scene.
    shower: MeteorShower,
    /// Wall clock driving the declarative animations.
    started: Instant,
    /// Most recent validation diagnostic, shown in the status line.
    last_diagnostic: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`], replaying the settings file
    /// through the component's attribute path before mounting it.
    pub fn new() -> Self {
        let mut shower = MeteorShower::new();

        // A broken settings file falls back to defaults rather than
        // aborting the launch.
        let settings = Settings::load().unwrap_or_default();
        for (name, value) in settings.attribute_pairs() {
            shower.set_attribute(name, &value);
        }
        shower.mount();

        Self {
            running: false,
            shower,
            started: Instant::now(),
            last_diagnostic: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.shower.unmount();
        Ok(())
    }

    /// Renders the sky and the status line.
    fn render(&mut self, frame: &mut Frame) {
        if let Some(diagnostic) = self.shower.take_diagnostics().into_iter().last() {
            self.last_diagnostic = Some(diagnostic.to_string());
        }

        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        view::render(
            frame,
            &self.shower,
            elapsed_ms,
            self.last_diagnostic.as_deref(),
        );
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.adjust_meteors(-5),
            (_, KeyCode::Char('M')) => self.adjust_meteors(5),
            (_, KeyCode::Char('s')) => self.adjust_stars(-50),
            (_, KeyCode::Char('S')) => self.adjust_stars(50),
            (_, KeyCode::Char('b')) => self.shower.toggle_black_hole(None),
            (_, KeyCode::Char('g')) => self.cycle_gradient(),
            _ => {}
        }
    }

    /// Change the meteor count by `delta`; the component clamps to >= 1.
    fn adjust_meteors(&mut self, delta: i64) {
        let next = i64::from(self.shower.meteor_count()) + delta;
        self.shower.update_meteors(next);
    }

    /// Change the star count by `delta`.
    fn adjust_stars(&mut self, delta: i64) {
        let next = i64::from(self.shower.star_count()) + delta;
        self.shower.update_stars(next);
    }

    /// Cycle the background gradient style through the attribute path.
    fn cycle_gradient(&mut self) {
        let next = self.shower.gradient_style().next();
        self.shower.set_attribute("type_gradient", next.as_str());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
