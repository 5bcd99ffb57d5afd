//! Line handling for the interactive console.

use dotcmd_core::Dispatcher;
use dotcmd_core::input::split_command;
use dotcmd_types::Sender;

/// The tab-completion meta-command.
const COMPLETE_COMMAND: &str = ":complete";

/// Reply for labels no dispatcher owns.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type \"help\" for help.";

/// What the read loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A dispatcher bound to the console sender.
pub struct Session<S: Sender> {
    dispatcher: Dispatcher,
    sender: S,
}

impl<S: Sender> Session<S> {
    pub fn new(dispatcher: Dispatcher, sender: S) -> Self {
        Self { dispatcher, sender }
    }

    #[cfg(test)]
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Process one input line.
    pub fn run_line(&self, line: &str) -> anyhow::Result<Flow> {
        let trimmed = line.trim_start();
        let (head, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        if head == COMPLETE_COMMAND {
            let suggestions = self.complete(rest)?;
            if suggestions.is_empty() {
                self.sender.send_message("(no suggestions)");
            } else {
                self.sender.send_message(&suggestions.join("  "));
            }
            return Ok(Flow::Continue);
        }

        let Some((label, args)) = split_command(trimmed, false)? else {
            return Ok(Flow::Continue);
        };

        match label.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                self.help();
                return Ok(Flow::Continue);
            },
            _ => {},
        }

        if !self.dispatcher.owns(&label) {
            self.sender.send_message(UNKNOWN_COMMAND);
            return Ok(Flow::Continue);
        }

        let handled = self.dispatcher.handle(&self.sender, &label, &args)?;
        if !handled && let Some(host) = self.dispatcher.host_commands().get(&label) {
            for usage in host.usage_for(&label) {
                self.sender.send_message(&usage);
            }
        }
        Ok(Flow::Continue)
    }

    /// Suggestions for a partial line, falling back to sub-command names
    /// when nothing registered answers.
    pub fn complete(&self, partial_line: &str) -> anyhow::Result<Vec<String>> {
        let Some((label, args)) = split_command(partial_line, true)? else {
            return Ok(self.top_level_matching(""));
        };
        if args.is_empty() {
            return Ok(self.top_level_matching(&label));
        }

        let completion = self.dispatcher.complete(&self.sender, &label, &args)?;
        Ok(completion
            .unwrap_or_else(|| self.dispatcher.subcommand_suggestions(&self.sender, &label, &args)))
    }

    fn top_level_matching(&self, partial: &str) -> Vec<String> {
        let partial = partial.to_lowercase();
        let mut names: Vec<String> = ["help", "quit"]
            .into_iter()
            .map(str::to_string)
            .chain(self.dispatcher.host_commands().iter().map(|c| c.name().to_string()))
            .filter(|name| name.starts_with(&partial))
            .collect();
        names.sort();
        names
    }

    fn help(&self) {
        self.sender.send_message("Commands:");
        for entry in self.dispatcher.commands() {
            if !entry.permission.is_empty() && !self.sender.has_permission(&entry.permission) {
                continue;
            }
            let words = entry.path.segments().collect::<Vec<_>>().join(" ");
            self.sender
                .send_message(&format_help_line(&words, &entry.description));
        }
    }
}

fn format_help_line(words: &str, description: &str) -> String {
    if description.is_empty() {
        format!("  /{words}")
    } else {
        format!("  /{words:<16} {description}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::sender::ConsoleSender;
    use dotcmd_types::FrameworkConfig;

    fn session(permissions: &[&str]) -> Session<ConsoleSender> {
        let mut dispatcher = Dispatcher::new(FrameworkConfig::default());
        dispatcher.register_all(demo::registrations());
        let sender =
            ConsoleSender::buffered("tester", permissions.iter().map(|p| p.to_string()));
        Session::new(dispatcher, sender)
    }

    fn run(s: &Session<ConsoleSender>, line: &str) -> Vec<String> {
        assert_eq!(s.run_line(line).unwrap(), Flow::Continue);
        s.sender().drain()
    }

    #[test]
    fn greet_world() {
        let s = session(&[]);
        assert_eq!(run(&s, "greet world"), vec!["Hello, world!"]);
        assert_eq!(run(&s, "greet"), vec!["Hello, world!"]);
    }

    #[test]
    fn quoted_arguments() {
        let s = session(&[]);
        assert_eq!(run(&s, "greet 'big world'"), vec!["Hello, big world!"]);
    }

    #[test]
    fn fly_requires_permission() {
        let s = session(&[]);
        assert_eq!(
            run(&s, "fly on"),
            vec!["You do not have permission to perform that action"]
        );
        let s = session(&["demo.fly"]);
        assert_eq!(run(&s, "fly on"), vec!["Flight enabled."]);
        assert_eq!(run(&s, "f"), vec!["Flight disabled."]);
        assert_eq!(run(&s, "F OFF"), vec!["Flight disabled."]);
    }

    #[test]
    fn fly_with_unknown_subcommand_shows_usage() {
        let s = session(&["*"]);
        assert_eq!(run(&s, "fly sideways"), vec!["/fly [on|off]"]);
        assert_eq!(run(&s, "f sideways"), vec!["/f [on|off]"]);
    }

    #[test]
    fn build_wall() {
        let s = session(&[]);
        assert_eq!(run(&s, "build wall 10 5"), vec!["Built a 10x5 wall."]);
        assert_eq!(run(&s, "build wall 10"), vec!["Usage: /build wall <width> <height>"]);
        assert_eq!(run(&s, "build"), vec!["Usage: /build wall <width> <height>"]);
    }

    #[test]
    fn failing_handler_surfaces_execution_error() {
        let s = session(&[]);
        let err = s.run_line("build wall ten 5").unwrap_err();
        assert!(err.to_string().contains("executing command 'build'"));
        // The session keeps working afterwards.
        assert_eq!(run(&s, "greet"), vec!["Hello, world!"]);
    }

    #[test]
    fn unknown_command() {
        let s = session(&[]);
        assert_eq!(run(&s, "dance"), vec![UNKNOWN_COMMAND]);
    }

    #[test]
    fn blank_line_is_ignored() {
        let s = session(&[]);
        assert!(run(&s, "   ").is_empty());
    }

    #[test]
    fn quit() {
        let s = session(&[]);
        assert_eq!(s.run_line("quit").unwrap(), Flow::Quit);
        assert_eq!(s.run_line("EXIT").unwrap(), Flow::Quit);
    }

    #[test]
    fn help_hides_forbidden_commands() {
        let s = session(&[]);
        let lines = run(&s, "help");
        assert_eq!(lines[0], "Commands:");
        assert!(lines.iter().any(|l| l.contains("/greet")));
        assert!(lines.iter().any(|l| l.contains("/build wall")));
        assert!(!lines.iter().any(|l| l.contains("/fly")));
    }

    #[test]
    fn complete_subcommands() {
        let s = session(&["*"]);
        assert_eq!(s.complete("fly ").unwrap(), vec!["on", "off"]);
        assert_eq!(s.complete("fly o").unwrap(), vec!["on", "off"]);
        assert_eq!(s.complete("fly of").unwrap(), vec!["off"]);
        assert_eq!(s.complete("build w").unwrap(), vec!["wall"]);
    }

    #[test]
    fn complete_intentionally_empty() {
        let s = session(&["*"]);
        assert!(s.complete("build wall 1").unwrap().is_empty());
    }

    #[test]
    fn complete_falls_back_to_subcommand_names() {
        let s = session(&["*"]);
        assert_eq!(s.complete("build ").unwrap(), vec!["wall"]);
        assert_eq!(s.complete("BUILD W").unwrap(), vec!["wall"]);
        assert!(s.complete("build x ").unwrap().is_empty());
        assert!(s.complete("greet x").unwrap().is_empty());
    }

    #[test]
    fn complete_uses_native_handler_completion() {
        let s = session(&[]);
        assert_eq!(s.complete("warp s").unwrap(), vec!["shop", "spawn"]);
    }

    #[test]
    fn complete_top_level() {
        let s = session(&[]);
        assert_eq!(s.complete("g").unwrap(), vec!["greet"]);
        assert_eq!(s.complete("f").unwrap(), vec!["f", "fly"]);
    }

    #[test]
    fn complete_meta_command_prints() {
        let s = session(&["*"]);
        assert_eq!(run(&s, ":complete warp a"), vec!["arena"]);
        assert_eq!(run(&s, ":complete greet x"), vec!["(no suggestions)"]);
        let everything = s.complete("").unwrap().join("  ");
        assert_eq!(run(&s, ":complete"), vec![everything]);
    }

    #[test]
    fn complete_meta_command_needs_whole_word() {
        let s = session(&["*"]);
        assert_eq!(run(&s, ":completely warp a"), vec![UNKNOWN_COMMAND]);
    }
}
