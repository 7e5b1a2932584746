use super::statement::MetaCommand;

/// Returns `None` when `input` is not a meta-command (does not start with `.`).
pub fn parse_meta_command(input: &str) -> Option<MetaCommand> {
    let input = input.trim();
    if !input.starts_with('.') {
        return None;
    }

    Some(match input {
        ".exit" => MetaCommand::Exit,
        ".help" => MetaCommand::Help,
        other => MetaCommand::Unrecognized(other.to_string()),
    })
}
