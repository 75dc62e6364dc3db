use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Topic prefix shared by every buildpack command.
const TOPIC: &str = "buildpacks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildpackCommand {
    Show,
    Set,
    Add,
    Remove,
    Clear,
}

impl BuildpackCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Set => "set",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Clear => "clear",
        }
    }

    pub fn canonical(self) -> String {
        match self {
            Self::Show => TOPIC.to_string(),
            other => format!("{TOPIC}:{}", other.as_str()),
        }
    }

    /// Whether the command writes to the remote list.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Show)
    }

    fn from_sub(sub: &str) -> Option<Self> {
        match sub {
            "show" => Some(Self::Show),
            "set" => Some(Self::Set),
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "clear" => Some(Self::Clear),
            _ => None,
        }
    }
}

impl Display for BuildpackCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[derive(Debug, Error)]
pub enum CommandParseError {
    #[error("unknown command '{0}'")]
    Unknown(String),
}

impl FromStr for BuildpackCommand {
    type Err = CommandParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(2, ':');
        let topic = parts.next().unwrap_or_default();
        let sub = parts.next();

        let parsed = match (topic, sub) {
            ("buildpacks" | "buildpack", None) => Some(Self::Show),
            ("buildpacks" | "buildpack", Some(sub)) => Self::from_sub(sub),
            (bare, None) => Self::from_sub(bare),
            _ => None,
        };

        parsed.ok_or_else(|| CommandParseError::Unknown(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_topic_only_as_show() {
        let cmd = BuildpackCommand::from_str("buildpacks").expect("topic should parse");
        assert_eq!(cmd, BuildpackCommand::Show);
    }

    #[test]
    fn parses_topic_and_subcommand() {
        let cmd = BuildpackCommand::from_str("buildpacks:add").expect("buildpacks:add should parse");
        assert_eq!(cmd, BuildpackCommand::Add);
        assert_eq!(cmd.canonical(), "buildpacks:add");
    }

    #[test]
    fn parses_bare_and_singular_forms() {
        assert_eq!(
            BuildpackCommand::from_str("remove").unwrap(),
            BuildpackCommand::Remove
        );
        assert_eq!(
            BuildpackCommand::from_str("buildpack:clear").unwrap(),
            BuildpackCommand::Clear
        );
    }

    #[test]
    fn rejects_unknown_command() {
        let err = BuildpackCommand::from_str("buildpacks:frobnicate").expect_err("must fail");
        assert!(matches!(err, CommandParseError::Unknown(_)));

        let err = BuildpackCommand::from_str("config:set").expect_err("must fail");
        assert!(matches!(err, CommandParseError::Unknown(_)));
    }
}
