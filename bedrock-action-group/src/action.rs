//! The set of served action groups and functions.
//!
//! Routing is a two-level match: the request's `actionGroup` selects an
//! [`ActionGroup`], then its `function` selects an [`Action`] within that
//! group. Both enumerations are closed, so adding an action means adding a
//! variant and every `match` over them must account for it.
//!
//! # Example
//!
//! ```rust
//! use bedrock_action_group::{Action, RoutingError};
//!
//! let action = Action::resolve("action-group", "do-some-action").unwrap();
//! assert_eq!(action, Action::DoSomeAction);
//!
//! let err = Action::resolve("action-group", "nope").unwrap_err();
//! assert!(matches!(err, RoutingError::UnknownFunction { .. }));
//! ```

use crate::error::RoutingError;
use crate::schema::{
    ActionGroupDefinition, ActionGroupState, FunctionDefinition, FunctionSchema, ParameterDetail,
};

/// Name of the parameter holding the user's first name.
pub const FIRST_NAME: &str = "first_name";

/// Name of the parameter holding the user's last name.
pub const LAST_NAME: &str = "last_name";

/// An action group served by this function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionGroup {
    /// The starter group, named `action-group`
    Starter,
}

impl ActionGroup {
    /// Every served action group.
    pub const ALL: &'static [ActionGroup] = &[ActionGroup::Starter];

    /// The name the agent uses for this group.
    pub fn name(self) -> &'static str {
        match self {
            Self::Starter => "action-group",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Starter => "Action group",
        }
    }

    /// Looks up a group by the name the agent sent.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|group| group.name() == name)
    }

    /// The actions exposed by this group.
    pub fn actions(self) -> &'static [Action] {
        match self {
            Self::Starter => &[Action::DoSomeAction],
        }
    }

    /// Looks up an action of this group by function name.
    pub fn action(self, function: &str) -> Option<Action> {
        self.actions()
            .iter()
            .copied()
            .find(|action| action.function_name() == function)
    }

    /// The deployable definition of this group.
    pub fn definition(self) -> ActionGroupDefinition {
        ActionGroupDefinition {
            action_group_name: self.name().to_string(),
            description: self.description().to_string(),
            action_group_state: ActionGroupState::Enabled,
            function_schema: FunctionSchema {
                functions: self.actions().iter().map(|action| action.definition()).collect(),
            },
        }
    }
}

/// A function the agent can call, qualified by its action group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `action-group` / `do-some-action`: greets the user by first name
    DoSomeAction,
}

impl Action {
    /// Every served action.
    pub const ALL: &'static [Action] = &[Action::DoSomeAction];

    pub fn action_group(self) -> ActionGroup {
        match self {
            Self::DoSomeAction => ActionGroup::Starter,
        }
    }

    /// The function name the agent uses for this action.
    pub fn function_name(self) -> &'static str {
        match self {
            Self::DoSomeAction => "do-some-action",
        }
    }

    /// Resolves the routing fields of a request.
    ///
    /// The action group is checked first; an unknown group is reported as
    /// such regardless of the function name.
    pub fn resolve(action_group: &str, function: &str) -> Result<Self, RoutingError> {
        let group = ActionGroup::from_name(action_group)
            .ok_or_else(|| RoutingError::unknown_action_group(action_group))?;
        group
            .action(function)
            .ok_or_else(|| RoutingError::unknown_function(action_group, function))
    }

    /// The function definition advertised to the agent.
    pub fn definition(self) -> FunctionDefinition {
        match self {
            Self::DoSomeAction => {
                FunctionDefinition::new(self.function_name(), "description of doing some action")
                    .with_parameter(FIRST_NAME, ParameterDetail::required_string("first name of the user"))
                    .with_parameter(LAST_NAME, ParameterDetail::optional_string("last name of the user"))
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.action_group().name(), self.function_name())
    }
}
