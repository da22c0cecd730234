//! Interactive entry of the cooks that will take part in a kitchen run.

use crate::cook::Cook;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

#[derive(Debug)]
enum SetupState {
    AskName,
    AskType { name: String },
    AskTrainingLocation { name: String },
    Confirm(Cook),
    AskContinue,
    Done,
}

struct Setup<'a, R, W> {
    input: R,
    out: &'a mut W,
    cooks: Vec<Cook>,
}

/// Prompts on `out` and reads answers from `input` until the user declines
/// to add another cook. Running out of input ends the entry early; a cook
/// that was only partly entered is dropped.
pub fn read_cooks<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Vec<Cook>> {
    let mut setup = Setup {
        input,
        out,
        cooks: vec![],
    };
    let mut state = SetupState::AskName;
    while !matches!(state, SetupState::Done) {
        state = setup.step(state)?;
    }
    Ok(setup.cooks)
}

impl<R: BufRead, W: Write> Setup<'_, R, W> {
    fn step(&mut self, state: SetupState) -> Result<SetupState> {
        let next = match state {
            SetupState::AskName => match self.ask("Enter a cook's name: ")? {
                Some(name) => SetupState::AskType { name },
                None => SetupState::Done,
            },
            SetupState::AskType { name } => {
                let question = format!(
                    "What type of cook is {}? (enter normal or expert): ",
                    name
                );
                match self.ask(&question)? {
                    None => SetupState::Done,
                    Some(answer) => match answer.trim().to_lowercase().as_str() {
                        "normal" => SetupState::Confirm(Cook::new(name)),
                        "expert" => SetupState::AskTrainingLocation { name },
                        other => {
                            warn!("rejected cook type {:?} for {}", other, name);
                            writeln!(
                                self.out,
                                "Not a valid cook type! Please enter normal or expert.\n"
                            )?;
                            SetupState::AskType { name }
                        }
                    },
                }
            }
            SetupState::AskTrainingLocation { name } => {
                match self.ask(&format!("Where was {} trained? ", name))? {
                    Some(location) => SetupState::Confirm(Cook::expert(name, location)),
                    None => SetupState::Done,
                }
            }
            SetupState::Confirm(cook) => {
                info!("entered {}", cook);
                writeln!(self.out, "{} has now been entered as a cook.", cook.name)?;
                self.cooks.push(cook);
                SetupState::AskContinue
            }
            SetupState::AskContinue => {
                match self.ask(
                    "Want to enter another cook? Enter 'Y' (or anything else) to keep going. Enter 'N' to stop: ",
                )? {
                    Some(answer) if answer.to_lowercase() == "n" => SetupState::Done,
                    Some(_) => SetupState::AskName,
                    None => SetupState::Done,
                }
            }
            SetupState::Done => SetupState::Done,
        };
        Ok(next)
    }

    /// Writes `prompt` and reads one line without its terminator. `None`
    /// once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            warn!("input ended during cook setup");
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cook::CookKind;
    use std::io::Cursor;

    fn run(lines: &[&str]) -> (Vec<Cook>, String) {
        let input = Cursor::new(lines.join("\n") + "\n");
        let mut out = vec![];
        let cooks = read_cooks(input, &mut out).unwrap();
        (cooks, String::from_utf8(out).unwrap())
    }

    #[test]
    fn bad_type_is_reprompted_then_expert_created() {
        let (cooks, out) = run(&["Dana", "weird", "EXPERT", "Le Cordon Bleu", "n"]);

        assert_eq!(cooks.len(), 1);
        assert_eq!(cooks[0].name, "Dana");
        assert_eq!(
            cooks[0].kind,
            CookKind::Expert {
                training_location: "Le Cordon Bleu".into()
            }
        );
        assert!(cooks[0].recipes().is_empty());
        assert_eq!(
            out.matches("Not a valid cook type! Please enter normal or expert.")
                .count(),
            1
        );
        assert_eq!(
            out.matches("What type of cook is Dana? (enter normal or expert): ")
                .count(),
            2
        );
        assert!(out.contains("Where was Dana trained? "));
        assert!(out.contains("Dana has now been entered as a cook.\n"));
    }

    #[test]
    fn anything_but_n_keeps_going() {
        let (cooks, _) = run(&[
            "Alice", " Normal ", "y", "Bob", "expert", "Boot Camp", "no", "", "normal", "N",
        ]);
        let names: Vec<&str> = cooks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", ""]);
        assert!(!cooks[0].is_expert());
        assert!(cooks[1].is_expert());
        assert!(!cooks[2].is_expert());
    }

    #[test]
    fn padded_n_does_not_stop() {
        let (cooks, _) = run(&["Alice", "normal", " n", "Bob", "normal", "n"]);
        assert_eq!(cooks.len(), 2);
    }

    #[test]
    fn end_of_input_keeps_finished_cooks() {
        let (cooks, out) = run(&["Alice", "normal", "y", "Bob", "expert"]);
        assert_eq!(cooks.len(), 1);
        assert_eq!(cooks[0].name, "Alice");
        assert!(out.ends_with("Where was Bob trained? \n"));
    }

    #[test]
    fn empty_input_yields_no_cooks() {
        let mut out = vec![];
        let cooks = read_cooks(Cursor::new(""), &mut out).unwrap();
        assert!(cooks.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "Enter a cook's name: \n");
    }
}
