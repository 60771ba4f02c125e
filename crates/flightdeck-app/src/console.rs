//! Line-based control input for the interactive host.
//!
//! Each line is either a key event written as `+Code` (pressed) or `-Code`
//! (released) using browser key codes, or a JSON `ControlInput`.

use flightdeck_core::commands::ControlInput;
use flightdeck_core::enums::ControlKey;

#[derive(Debug, PartialEq)]
pub enum ConsoleLine {
    Input(ControlInput),
    Blank,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ConsoleLine, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ConsoleLine::Blank);
    }
    if line == "quit" || line == "exit" {
        return Ok(ConsoleLine::Quit);
    }

    if let Some(code) = line.strip_prefix('+') {
        let key = key(code)?;
        return Ok(ConsoleLine::Input(ControlInput::KeyDown { key }));
    }
    if let Some(code) = line.strip_prefix('-') {
        let key = key(code)?;
        return Ok(ConsoleLine::Input(ControlInput::KeyUp { key }));
    }

    serde_json::from_str(line)
        .map(ConsoleLine::Input)
        .map_err(|e| format!("not a control input: {e}"))
}

fn key(code: &str) -> Result<ControlKey, String> {
    ControlKey::from_code(code).ok_or_else(|| format!("unbound key code: {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lines() {
        assert_eq!(
            parse_line("+KeyW"),
            Ok(ConsoleLine::Input(ControlInput::KeyDown {
                key: ControlKey::PitchUp
            }))
        );
        assert_eq!(
            parse_line(" -KeyA "),
            Ok(ConsoleLine::Input(ControlInput::KeyUp {
                key: ControlKey::RollLeft
            }))
        );
        assert!(parse_line("+KeyZ").is_err());
    }

    #[test]
    fn test_json_and_control_lines() {
        assert_eq!(
            parse_line(r#"{"type":"SetThrottle","value":75.0}"#),
            Ok(ConsoleLine::Input(ControlInput::SetThrottle { value: 75.0 }))
        );
        assert_eq!(parse_line(""), Ok(ConsoleLine::Blank));
        assert_eq!(parse_line("# comment"), Ok(ConsoleLine::Blank));
        assert_eq!(parse_line("quit"), Ok(ConsoleLine::Quit));
        assert!(parse_line("throttle up").is_err());
    }
}
