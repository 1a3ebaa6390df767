//! Prints the definition of every served action group as JSON.
//!
//! The output matches the shape Bedrock expects for an action group's
//! `functionSchema`, so deployment tooling can read it instead of
//! repeating the function and parameter list.

use bedrock_action_group::ActionGroup;

fn main() -> Result<(), serde_json::Error> {
    let definitions: Vec<_> = ActionGroup::ALL
        .iter()
        .map(|group| group.definition())
        .collect();
    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}
