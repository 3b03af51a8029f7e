/// Split a `path[:line]` argument. Line numbers are 1-based on the
/// command line and 0-based internally; a non-numeric suffix after the
/// last colon is treated as part of the path.
pub fn parse_filepath_with_line(filepath_arg: &str) -> (String, Option<usize>) {
    if let Some(colon_pos) = filepath_arg.rfind(':') {
        let path_part = &filepath_arg[..colon_pos];
        let line_part = &filepath_arg[colon_pos + 1..];

        if let Ok(line_num) = line_part.parse::<usize>() {
            (path_part.to_string(), Some(line_num.saturating_sub(1)))
        } else {
            (filepath_arg.to_string(), None)
        }
    } else {
        (filepath_arg.to_string(), None)
    }
}
