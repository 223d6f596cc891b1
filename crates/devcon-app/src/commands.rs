//! Demo game world and the commands that poke at it.

use std::cell::RefCell;
use std::rc::Rc;

use devcon_console::{
    CommandDescriptor, CommandOutput, CommandProvider, DevconError, HelpCommand, Result,
};

/// Largest batch `spawn` accepts in one go.
const MAX_SPAWN: usize = 1000;

/// Toy world state the debug commands mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub entities: Vec<String>,
    pub time_scale: f32,
    pub god_mode: bool,
}

impl Default for World {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            time_scale: 1.0,
            god_mode: false,
        }
    }
}

pub type SharedWorld = Rc<RefCell<World>>;

/// Every command the demo host registers, in registration order.
pub fn providers(world: &SharedWorld) -> Vec<Box<dyn CommandProvider>> {
    vec![
        Box::new(HelpCommand),
        Box::new(SpawnCmd(Rc::clone(world))),
        Box::new(KillAllCmd(Rc::clone(world))),
        Box::new(GodCmd(Rc::clone(world))),
        Box::new(TimeScaleCmd(Rc::clone(world))),
        Box::new(StatusCmd(Rc::clone(world))),
        Box::new(EchoCmd),
    ]
}

struct SpawnCmd(SharedWorld);

impl CommandProvider for SpawnCmd {
    fn command(&self) -> CommandDescriptor {
        let world = Rc::clone(&self.0);
        CommandDescriptor::with_args(
            "spawn",
            "Spawn entities of a kind",
            "spawn <count> <kind>",
            move |args, _| {
                let (count, kind) = match args {
                    [count, kind, ..] => (parse_count(count)?, *kind),
                    _ => return Err(DevconError::Command("usage: spawn <count> <kind>".into())),
                };
                let mut world = world.borrow_mut();
                world
                    .entities
                    .extend(std::iter::repeat_n(kind.to_string(), count));
                Ok(CommandOutput::Text(format!(
                    "Spawned {count} {kind} ({} total)",
                    world.entities.len()
                )))
            },
        )
    }
}

fn parse_count(raw: &str) -> Result<usize> {
    let count: usize = raw
        .parse()
        .map_err(|_| DevconError::Command(format!("invalid count: {raw}")))?;
    if count == 0 || count > MAX_SPAWN {
        return Err(DevconError::Command(format!(
            "count must be between 1 and {MAX_SPAWN}"
        )));
    }
    Ok(count)
}

struct KillAllCmd(SharedWorld);

impl CommandProvider for KillAllCmd {
    fn command(&self) -> CommandDescriptor {
        let world = Rc::clone(&self.0);
        CommandDescriptor::plain("killall", "Remove every entity", "killall", move |_| {
            let removed = std::mem::take(&mut world.borrow_mut().entities).len();
            Ok(CommandOutput::Text(format!("Removed {removed} entities")))
        })
    }
}

struct GodCmd(SharedWorld);

impl CommandProvider for GodCmd {
    fn command(&self) -> CommandDescriptor {
        let world = Rc::clone(&self.0);
        CommandDescriptor::plain("god", "Toggle invulnerability", "god", move |_| {
            let mut world = world.borrow_mut();
            world.god_mode = !world.god_mode;
            let state = if world.god_mode { "on" } else { "off" };
            Ok(CommandOutput::Text(format!("God mode {state}")))
        })
    }
}

struct TimeScaleCmd(SharedWorld);

impl CommandProvider for TimeScaleCmd {
    fn command(&self) -> CommandDescriptor {
        let world = Rc::clone(&self.0);
        CommandDescriptor::with_args(
            "timescale",
            "Set simulation speed",
            "timescale <factor>",
            move |args, _| {
                let raw = args
                    .first()
                    .ok_or_else(|| DevconError::Command("usage: timescale <factor>".into()))?;
                let factor: f32 = raw
                    .parse()
                    .map_err(|_| DevconError::Command(format!("invalid factor: {raw}")))?;
                if !factor.is_finite() || factor < 0.0 {
                    return Err(DevconError::Command(
                        "factor must be a non-negative number".into(),
                    ));
                }
                world.borrow_mut().time_scale = factor;
                Ok(CommandOutput::Text(format!("Time scale {factor}")))
            },
        )
    }
}

struct StatusCmd(SharedWorld);

impl CommandProvider for StatusCmd {
    fn command(&self) -> CommandDescriptor {
        let world = Rc::clone(&self.0);
        CommandDescriptor::plain("status", "Show world state", "status", move |env| {
            let world = world.borrow();
            Ok(CommandOutput::Text(format!(
                "t={:.1}s entities={} timescale={} god={}",
                env.now,
                world.entities.len(),
                world.time_scale,
                world.god_mode
            )))
        })
    }
}

struct EchoCmd;

impl CommandProvider for EchoCmd {
    fn command(&self) -> CommandDescriptor {
        CommandDescriptor::with_args("echo", "Print arguments", "echo [text...]", |args, _| {
            Ok(CommandOutput::Text(args.join(" ")))
        })
    }
}
