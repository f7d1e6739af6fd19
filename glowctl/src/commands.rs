//! The command table
//!
//! Maps prompt input to device actions. Built once at startup and handed
//! to the REPL by reference; a later registration under an existing name
//! replaces the earlier entry.

use std::collections::HashMap;

/// What a command does once its name is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the power-on frame.
    On,
    /// Write the power-off frame.
    Off,
    /// List every registered command.
    Help,
}

#[derive(Debug)]
pub struct Command {
    pub action: Action,
    pub help: String,
}

#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, Command>,
}

impl Registry {
    /// The three commands the tool ships with.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register(Action::On, "on", "Turn the glasses on");
        registry.register(Action::Off, "off", "Turn the glasses off");
        registry.register(Action::Help, "help", "Show this message");
        registry
    }

    /// Last registration under a name wins.
    pub fn register(&mut self, action: Action, name: &str, help: &str) {
        self.commands.insert(
            name.to_string(),
            Command {
                action,
                help: help.to_string(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// One line per command. Iteration order follows the map and is not
    /// stable.
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        for (name, command) in &self.commands {
            out.push_str(&format!("  {name:<7} {}\n", command.help));
        }
        out
    }
}
