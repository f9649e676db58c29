//! # Application Controller
//!
//! Orchestrates the form: reads key events, applies commands to the model,
//! polls the HTTP outcome channel, and triggers rendering. I/O arrives by
//! injection so the loop runs identically against a real terminal or a
//! scripted test harness.

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::form::model::FormModel;
use crate::form::payload::validate_payload;
use crate::http::{HttpService, OutcomeMessage};
use crate::repl::command::{map_key, Command};
use crate::repl::events::{EventSource, TerminalEventSource};
use crate::repl::view::FormRenderer;

/// Poll timeout for the event loop tick
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller driving the form
pub struct AppController<ES: EventSource, W: Write> {
    model: FormModel,
    http: HttpService,
    renderer: FormRenderer<W>,
    event_source: ES,
    should_quit: bool,
}

impl AppController<TerminalEventSource, std::io::Stdout> {
    /// Create a controller attached to the real terminal
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        Self::build(
            cmd_args,
            TerminalEventSource::new(),
            FormRenderer::terminal(std::io::stdout()),
        )
    }
}

impl<ES: EventSource, W: Write> AppController<ES, W> {
    /// Create a controller with injected I/O, for headless use
    pub fn with_io(cmd_args: CommandLineArgs, event_source: ES, sink: W) -> Result<Self> {
        Self::build(cmd_args, event_source, FormRenderer::with_sink(sink))
    }

    fn build(
        cmd_args: CommandLineArgs,
        event_source: ES,
        renderer: FormRenderer<W>,
    ) -> Result<Self> {
        let endpoint = config::get_endpoint_url(cmd_args.endpoint());
        tracing::info!("Form posts to '{endpoint}'");
        let http = HttpService::new(endpoint)?;

        Ok(Self {
            model: FormModel::new(),
            http,
            renderer,
            event_source,
            should_quit: false,
        })
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn renderer(&self) -> &FormRenderer<W> {
        &self.renderer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Redraw immediately from the current state
    pub fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.model)
    }

    /// Run the main event loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.initialize()?;
        self.renderer.render(&self.model)?;

        while !self.should_quit {
            let mut dirty = false;

            if self.event_source.poll(EVENT_POLL_INTERVAL)? {
                match self.event_source.read()? {
                    Event::Key(key) => {
                        if let Some(command) = map_key(key) {
                            tracing::debug!("Applying command: {command:?}");
                            dirty |= self.apply(command);
                        }
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            dirty |= self.drain_outcomes();

            if dirty && !self.should_quit {
                self.renderer.render(&self.model)?;
            }
        }

        self.renderer.restore()?;
        Ok(())
    }

    /// Apply one command to the model. Returns true if state changed in a
    /// way that needs a redraw.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::InsertChar(c) => {
                self.model.insert_char(c);
                true
            }
            Command::DeleteChar => {
                self.model.delete_char();
                true
            }
            Command::ClearInput => {
                self.model.clear_input();
                true
            }
            Command::ToggleFilter(tag) => {
                self.model.toggle_filter(tag);
                true
            }
            Command::Submit => {
                self.submit();
                true
            }
            Command::Quit => {
                self.should_quit = true;
                false
            }
        }
    }

    /// Begin a submission attempt: clear both outcome slots, validate, and
    /// dispatch exactly one request when validation passes. Validation
    /// failures resolve immediately without touching the network.
    fn submit(&mut self) {
        self.model.begin_submission();

        match validate_payload(self.model.input()) {
            Ok(_) => {
                self.http.execute_async(self.model.input().to_string());
            }
            Err(error) => {
                tracing::warn!("Submission rejected: {error}");
                self.model.fail(&error);
            }
        }
    }

    /// Apply any pending submission outcomes to the model. Outcomes land in
    /// the order they resolve; with overlapping submissions the
    /// last-to-resolve wins.
    pub fn drain_outcomes(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.http.poll_outcome() {
            match outcome {
                OutcomeMessage::Success { body } => self.model.succeed(body),
                OutcomeMessage::Failed { error } => self.model.fail(&error),
            }
            changed = true;
        }
        changed
    }
}
