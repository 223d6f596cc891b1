//! Input-line dispatch.
//!
//! A failing command never escapes this boundary: errors and panics from an
//! action are logged and reported as `Dispatch::Failed`, and the registry is
//! left exactly as it was.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::descriptor::{CommandOutput, Environment};
use crate::registry::CommandRegistry;

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// No registered command matched. Not an error.
    Unmatched,
    /// The command ran and produced `output`.
    Executed { id: String, output: CommandOutput },
    /// The command returned an error or panicked.
    Failed { id: String, message: String },
}

impl CommandRegistry {
    /// Match `line` to a command and invoke it.
    ///
    /// Tokens are split on whitespace; every token after the first is
    /// passed to argument-taking commands.
    pub fn dispatch(&self, line: &str, now: f32) -> Dispatch {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(cmd) = self.find_match(line) else {
            if !tokens.is_empty() {
                log::debug!("No command matches '{}'", line.trim());
            }
            return Dispatch::Unmatched;
        };

        let args = tokens.get(1..).unwrap_or_default();
        let env = Environment {
            registry: self,
            now,
        };
        let id = cmd.id().to_string();

        let result = panic::catch_unwind(AssertUnwindSafe(|| cmd.invoke(args, &env)));
        let message = match result {
            Ok(Ok(output)) => {
                log::info!("Executed command '{id}'");
                return Dispatch::Executed { id, output };
            },
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(&*payload),
        };
        log::warn!("Failed to execute command: {message}");
        Dispatch::Failed { id, message }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "command panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use devcon_types::error::DevconError;

    use crate::descriptor::CommandDescriptor;

    type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

    /// Registry whose commands record every invocation into `calls`.
    fn recording(ids: &[(&str, bool)], calls: &Calls) -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        for &(id, takes_args) in ids {
            let calls = Rc::clone(calls);
            let name = id.to_string();
            let d = if takes_args {
                CommandDescriptor::with_args(id, "", id, move |args, _| {
                    let args = args.iter().map(|a| a.to_string()).collect();
                    calls.borrow_mut().push((name.clone(), args));
                    Ok(CommandOutput::None)
                })
            } else {
                CommandDescriptor::plain(id, "", id, move |_| {
                    calls.borrow_mut().push((name.clone(), Vec::new()));
                    Ok(CommandOutput::None)
                })
            };
            reg.register(d).unwrap();
        }
        reg
    }

    #[test]
    fn dispatch_with_args() {
        let calls = Calls::default();
        let reg = recording(&[("help", false), ("spawn", true)], &calls);
        let result = reg.dispatch("spawn 3 x", 0.0);
        assert_eq!(
            result,
            Dispatch::Executed {
                id: "spawn".into(),
                output: CommandOutput::None
            }
        );
        assert_eq!(
            *calls.borrow(),
            [("spawn".to_string(), vec!["3".to_string(), "x".to_string()])]
        );
    }

    #[test]
    fn unmatched_input_is_silent() {
        let calls = Calls::default();
        let reg = recording(&[("help", false), ("spawn", true)], &calls);
        assert_eq!(reg.dispatch("foo", 0.0), Dispatch::Unmatched);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn empty_and_whitespace_input() {
        let calls = Calls::default();
        let reg = recording(&[("help", false)], &calls);
        assert_eq!(reg.dispatch("", 0.0), Dispatch::Unmatched);
        assert_eq!(reg.dispatch(" \t ", 0.0), Dispatch::Unmatched);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn case_insensitive_match() {
        let calls = Calls::default();
        let reg = recording(&[("help", false)], &calls);
        assert!(matches!(reg.dispatch("HELP", 0.0), Dispatch::Executed { .. }));
        assert!(matches!(reg.dispatch("help", 0.0), Dispatch::Executed { .. }));
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn plain_command_ignores_trailing_tokens() {
        let calls = Calls::default();
        let reg = recording(&[("god", false)], &calls);
        reg.dispatch("god on please", 0.0);
        assert_eq!(*calls.borrow(), [("god".to_string(), Vec::new())]);
    }

    #[test]
    fn repeated_whitespace_between_args() {
        let calls = Calls::default();
        let reg = recording(&[("spawn", true)], &calls);
        reg.dispatch("  spawn\t 3    x  ", 0.0);
        assert_eq!(calls.borrow()[0].1, ["3", "x"]);
    }

    #[test]
    fn args_only_after_first_token() {
        let calls = Calls::default();
        let reg = recording(&[("spawn", true)], &calls);
        reg.dispatch("spawn", 0.0);
        assert!(calls.borrow()[0].1.is_empty());
    }

    #[test]
    fn exact_id_dispatches_only_that_command() {
        let calls = Calls::default();
        let reg = recording(&[("spawn", true), ("spawnall", true)], &calls);
        reg.dispatch("spawnall 2", 0.0);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].0, "spawnall");
    }

    #[test]
    fn error_is_caught_and_registry_still_works() {
        let calls = Calls::default();
        let mut reg = recording(&[("help", false)], &calls);
        reg.register(CommandDescriptor::plain("fail", "", "fail", |_| {
            Err(DevconError::Command("boom".into()))
        }))
        .unwrap();

        match reg.dispatch("fail", 0.0) {
            Dispatch::Failed { id, message } => {
                assert_eq!(id, "fail");
                assert!(message.contains("boom"));
            },
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(reg.len(), 2);
        assert!(matches!(reg.dispatch("help", 0.0), Dispatch::Executed { .. }));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn panic_is_caught() {
        let mut reg = CommandRegistry::new();
        reg.register(CommandDescriptor::with_args("crash", "", "crash", |args, _| {
            if args.is_empty() {
                panic!("no target");
            }
            Ok(CommandOutput::None)
        }))
        .unwrap();
        match reg.dispatch("crash", 0.0) {
            Dispatch::Failed { message, .. } => assert_eq!(message, "no target"),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(matches!(
            reg.dispatch("crash now", 0.0),
            Dispatch::Executed { .. }
        ));
    }

    #[test]
    fn formatted_panic_message() {
        let mut reg = CommandRegistry::new();
        reg.register(CommandDescriptor::plain("crash", "", "crash", |env| {
            panic!("crashed at {}", env.now)
        }))
        .unwrap();
        match reg.dispatch("crash", 1.5) {
            Dispatch::Failed { message, .. } => assert_eq!(message, "crashed at 1.5"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn action_output_is_returned() {
        let mut reg = CommandRegistry::new();
        reg.register(CommandDescriptor::with_args("echo", "", "echo", |args, _| {
            Ok(CommandOutput::Text(args.join(" ")))
        }))
        .unwrap();
        assert_eq!(
            reg.dispatch("echo hello   world", 0.0),
            Dispatch::Executed {
                id: "echo".into(),
                output: CommandOutput::Text("hello world".into())
            }
        );
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_ids() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::hash_set("[a-z]{1,8}", 1..12)
                .prop_map(|set| set.into_iter().collect())
        }

        proptest! {
            #[test]
            fn typing_an_id_dispatches_exactly_that_id(
                ids in arb_ids(),
                pick in any::<proptest::sample::Index>(),
                args in proptest::collection::vec("[a-z0-9]{1,5}", 0..4),
            ) {
                let calls = Calls::default();
                let spec: Vec<(&str, bool)> = ids.iter().map(|id| (id.as_str(), true)).collect();
                let reg = recording(&spec, &calls);
                let target = &ids[pick.index(ids.len())];
                let line = std::iter::once(target.clone())
                    .chain(args.iter().cloned())
                    .collect::<Vec<_>>()
                    .join(" ");

                reg.dispatch(&line, 0.0);
                let calls = calls.borrow();
                prop_assert_eq!(calls.len(), 1);
                prop_assert_eq!(&calls[0].0, target);
                prop_assert_eq!(&calls[0].1, &args);
            }

            #[test]
            fn matching_ignores_case(ids in arb_ids(), pick in any::<proptest::sample::Index>()) {
                let calls = Calls::default();
                let spec: Vec<(&str, bool)> = ids.iter().map(|id| (id.as_str(), false)).collect();
                let reg = recording(&spec, &calls);
                let target = &ids[pick.index(ids.len())];

                let upper = reg.dispatch(&target.to_uppercase(), 0.0);
                prop_assert_eq!(upper, Dispatch::Executed {
                    id: target.clone(),
                    output: CommandOutput::None,
                });
            }
        }
    }
}
