//! Verlauf ausgefuehrter Commands, jeweils mit der Route, auf der sie liefen.

use super::AppCommand;
use crate::core::RouteVersion;
use std::collections::VecDeque;

/// Ein ausgefuehrter Command samt Routen-Kontext zum Ausfuehrungszeitpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub command: AppCommand,
    /// Geladene Route (None = noch keine)
    pub route_name: Option<String>,
    pub version: RouteVersion,
}

impl LoggedCommand {
    /// Ersetzt dieser Command die aktive Route?
    pub fn starts_route(&self) -> bool {
        matches!(
            self.command,
            AppCommand::LoadRoute { .. } | AppCommand::ImportGpx { .. }
        )
    }

    /// Aendert dieser Command die Punktfolge oder deren Properties?
    pub fn edits_route(&self) -> bool {
        matches!(
            self.command,
            AppCommand::SubmitAddForm | AppCommand::DeleteSelected | AppCommand::EditPoint { .. }
        )
    }
}

/// Ringpuffer der letzten Commands (aelteste fallen vorne heraus).
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
}

impl CommandLog {
    pub const DEFAULT_CAPACITY: usize = 500;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Kapazitaet 0 wird als 1 behandelt.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub fn record(&mut self, command: &AppCommand, route_name: Option<&str>, version: RouteVersion) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            command: command.clone(),
            route_name: route_name.map(str::to_string),
            version,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_command(&self) -> Option<&AppCommand> {
        self.entries.back().map(|entry| &entry.command)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    /// Commands nach dem letzten Laden bzw. GPX-Import, aelteste zuerst.
    ///
    /// Der ladende Command selbst gehoert nicht dazu. Ist er schon aus dem
    /// Puffer gefallen, kommt alles Gepufferte zurueck.
    pub fn since_last_load(&self) -> impl Iterator<Item = &LoggedCommand> {
        let start = self
            .entries
            .iter()
            .rposition(LoggedCommand::starts_route)
            .map_or(0, |index| index + 1);
        self.entries.range(start..)
    }

    /// Anzahl mutierender Commands seit dem letzten Laden.
    pub fn edits_since_last_load(&self) -> usize {
        self.since_last_load().filter(|e| e.edits_route()).count()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(name: &str) -> AppCommand {
        AppCommand::LoadRoute {
            name: name.into(),
            version: RouteVersion::A,
        }
    }

    #[test]
    fn oldest_entry_falls_out_at_capacity() {
        let mut log = CommandLog::with_capacity(3);
        for index in 0..4 {
            log.record(&AppCommand::ToggleSelection { index }, None, RouteVersion::A);
        }

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.iter().next().map(|e| &e.command),
            Some(&AppCommand::ToggleSelection { index: 1 })
        );
        assert_eq!(
            log.last_command(),
            Some(&AppCommand::ToggleSelection { index: 3 })
        );
    }

    #[test]
    fn since_last_load_skips_earlier_route() {
        let mut log = CommandLog::new();
        log.record(&load("yushan"), None, RouteVersion::A);
        log.record(&AppCommand::DeleteSelected, Some("yushan"), RouteVersion::A);
        log.record(&load("xueshan"), Some("yushan"), RouteVersion::A);
        log.record(&AppCommand::ToggleSelection { index: 0 }, Some("xueshan"), RouteVersion::A);
        log.record(&AppCommand::SubmitAddForm, Some("xueshan"), RouteVersion::A);

        let recent: Vec<_> = log.since_last_load().collect();
        assert_eq!(recent.len(), 2);
        assert!(recent
            .iter()
            .all(|e| e.route_name.as_deref() == Some("xueshan")));
        assert_eq!(log.edits_since_last_load(), 1);
    }

    #[test]
    fn without_load_everything_counts() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::EditPoint { index: 0, edit: Default::default() }, None, RouteVersion::B);
        assert_eq!(log.since_last_load().count(), 1);
        assert_eq!(log.edits_since_last_load(), 1);
    }
}
