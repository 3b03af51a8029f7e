use crate::command::Invocation;
use crate::types::ParameterConvention;

/// Environment variable read by the preview binary to pick a function.
pub const PREVIEW_ENV_VAR: &str = "SNOWSCAPE_PREVIEW";

const PREVIEW_FLAG: &str = "--preview";

/// Combine a resolved command with the target function name using the
/// configured parameter-passing convention, and derive the key for the
/// execution surface the command should run in.
pub fn dispatch(
    resolved_command: &str,
    function_name: &str,
    convention: ParameterConvention,
) -> Invocation {
    let command = match convention {
        ParameterConvention::PositionalFlag => {
            format!("{resolved_command} {PREVIEW_FLAG}={function_name}")
        }
        ParameterConvention::EnvironmentPrefix => {
            format!("{PREVIEW_ENV_VAR}=\"{function_name}\" {resolved_command}")
        }
    };
    Invocation {
        command,
        terminal_key: format!("snowscape-preview:{function_name}"),
    }
}
