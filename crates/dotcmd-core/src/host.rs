//! Host-side command table.
//!
//! The host platform only knows top-level command names. Every registered
//! path makes sure its root segment exists here so the host routes that
//! label to the dispatcher.

use std::collections::BTreeMap;

/// Placeholder in usage templates replaced by the label the sender typed.
pub const LABEL_PLACEHOLDER: &str = "<command>";

/// A top-level command as the host platform sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    name: String,
    plugin: String,
    description: String,
    usage: String,
}

impl HostCommand {
    pub fn new(name: &str, plugin: &str) -> Self {
        Self {
            name: name.to_string(),
            plugin: plugin.to_string(),
            description: String::new(),
            usage: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin that owns this command.
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw usage template (may contain `<command>`).
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub(crate) fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub(crate) fn set_usage(&mut self, usage: &str) {
        self.usage = usage.to_string();
    }

    /// Usage lines with `<command>` replaced by `label`.
    pub fn usage_for(&self, label: &str) -> Vec<String> {
        render_usage(&self.usage, label)
    }
}

/// Substitute the label into a usage template and split it into lines.
pub fn render_usage(template: &str, label: &str) -> Vec<String> {
    if template.is_empty() {
        return Vec::new();
    }
    template
        .replace(LABEL_PLACEHOLDER, label)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Top-level commands known to the host, keyed by lower-cased name.
#[derive(Debug, Default)]
pub struct HostCommandTable {
    commands: BTreeMap<String, HostCommand>,
}

impl HostCommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the command for `name`, creating it for `plugin` if missing.
    pub fn ensure(&mut self, name: &str, plugin: &str) -> &mut HostCommand {
        let key = name.to_lowercase();
        self.commands.entry(key).or_insert_with_key(|key| {
            log::debug!("Registering host command '{key}' for plugin {plugin}");
            HostCommand::new(key, plugin)
        })
    }

    pub fn get(&self, name: &str) -> Option<&HostCommand> {
        self.commands.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All host commands, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &HostCommand> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_once() {
        let mut table = HostCommandTable::new();
        table.ensure("Fly", "demo").set_usage("/<command> on|off");
        let again = table.ensure("fly", "other");
        assert_eq!(again.plugin(), "demo");
        assert_eq!(again.usage(), "/<command> on|off");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = HostCommandTable::new();
        table.ensure("build", "demo");
        assert!(table.contains("BUILD"));
        assert!(!table.contains("fly"));
    }

    #[test]
    fn usage_substitutes_label() {
        let mut cmd = HostCommand::new("fly", "demo");
        cmd.set_usage("Usage: /<command> on\n/<command> off");
        assert_eq!(cmd.usage_for("f"), vec!["Usage: /f on", "/f off"]);
    }

    #[test]
    fn empty_usage_renders_nothing() {
        assert!(render_usage("", "fly").is_empty());
    }

    #[test]
    fn iter_sorted() {
        let mut table = HostCommandTable::new();
        table.ensure("zeta", "p");
        table.ensure("alpha", "p");
        let names: Vec<_> = table.iter().map(HostCommand::name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
