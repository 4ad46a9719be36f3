//! Keystroke scripts for the `replay` command.
//!
//! One step per line:
//!
//! ```text
//! # comment
//! type te
//! wait 100
//! type tea
//! wait 400
//! blur
//! focus
//! select reviews
//! submit
//! clear
//! ```

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use search::Family;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Replace the input with this text (may be empty)
    Type(String),
    Wait(Duration),
    Blur,
    Focus,
    Select(Family),
    Clear,
    Submit,
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| parse_step(line).with_context(|| format!("line {}", index + 1)))
        .collect()
}

fn parse_step(line: &str) -> Result<Step> {
    let line = line.trim_start();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "type" => Ok(Step::Type(rest.to_string())),
        "wait" => {
            let millis: u64 = rest
                .trim()
                .parse()
                .with_context(|| format!("invalid wait duration {:?}", rest.trim()))?;
            Ok(Step::Wait(Duration::from_millis(millis)))
        }
        "blur" => Ok(Step::Blur),
        "focus" => Ok(Step::Focus),
        "clear" => Ok(Step::Clear),
        "submit" => Ok(Step::Submit),
        "select" => parse_family(rest.trim()).map(Step::Select),
        other => bail!("unknown step {:?}", other),
    }
}

fn parse_family(raw: &str) -> Result<Family> {
    match raw.to_ascii_lowercase().as_str() {
        "reviews" => Ok(Family::Reviews),
        "sources" => Ok(Family::Sources),
        "competitors" => Ok(Family::Competitors),
        _ => Err(anyhow!("unknown result family {:?}", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse_script("# warm up\ntype t\nwait 100\n\ntype te\nselect Reviews\nsubmit\n").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Type("t".to_string()),
                Step::Wait(Duration::from_millis(100)),
                Step::Type("te".to_string()),
                Step::Select(Family::Reviews),
                Step::Submit,
            ]
        );
    }

    #[test]
    fn test_type_keeps_inner_spaces() {
        assert_eq!(parse_step("type cold soup").unwrap(), Step::Type("cold soup".to_string()));
        assert_eq!(parse_step("type").unwrap(), Step::Type(String::new()));
    }

    #[test]
    fn test_bad_lines() {
        assert!(parse_script("wait soon").is_err());
        assert!(parse_script("select menus").is_err());
        let err = parse_script("type a\njump").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
