// License: MIT

use std::fmt;
use std::str::FromStr;

use crate::core::error::ParseError;

/// Extent of a build operation as announced by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildScope {
    Solution,
    Project,
    ProjectSelection,
    Batch,
}

/// Kind of build operation requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildAction {
    Build,
    RebuildAll,
    Clean,
    Deploy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    BuildBegin {
        scope: BuildScope,
        action: BuildAction,
        now_ms: u64,
    },

    BuildDone {
        scope: BuildScope,
        action: BuildAction,
        now_ms: u64,
    },
}

impl Event {
    pub fn now_ms(&self) -> u64 {
        match self {
            Event::BuildBegin { now_ms, .. } | Event::BuildDone { now_ms, .. } => *now_ms,
        }
    }
}

impl BuildAction {
    /// Full builds and rebuilds qualify for timing; clean and deploy do not.
    pub fn is_timed(&self) -> bool {
        matches!(self, BuildAction::Build | BuildAction::RebuildAll)
    }
}

impl FromStr for BuildScope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "solution" => Ok(BuildScope::Solution),
            "project" => Ok(BuildScope::Project),
            "selection" | "project-selection" => Ok(BuildScope::ProjectSelection),
            "batch" => Ok(BuildScope::Batch),
            _ => Err(ParseError::UnknownScope(s.to_string())),
        }
    }
}

impl FromStr for BuildAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "build" => Ok(BuildAction::Build),
            "rebuild" | "rebuild-all" => Ok(BuildAction::RebuildAll),
            "clean" => Ok(BuildAction::Clean),
            "deploy" => Ok(BuildAction::Deploy),
            _ => Err(ParseError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for BuildScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildScope::Solution => write!(f, "solution"),
            BuildScope::Project => write!(f, "project"),
            BuildScope::ProjectSelection => write!(f, "project-selection"),
            BuildScope::Batch => write!(f, "batch"),
        }
    }
}

impl fmt::Display for BuildAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildAction::Build => write!(f, "build"),
            BuildAction::RebuildAll => write!(f, "rebuild-all"),
            BuildAction::Clean => write!(f, "clean"),
            BuildAction::Deploy => write!(f, "deploy"),
        }
    }
}

pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}
