//! Demo command set registered by the console.

use std::cell::Cell;
use std::rc::Rc;

use dotcmd_core::{
    CommandArgs, CommandHandler, CommandSpec, CompleterSpec, HandlerError, HandlerResult,
    Registration,
};

/// Permission guarding the flight commands.
pub const FLY_PERMISSION: &str = "demo.fly";

/// Suggestions from `options` that start with the partial token.
fn matching(options: &[&str], args: &CommandArgs<'_>) -> Vec<String> {
    let partial = args.partial().unwrap_or("").to_lowercase();
    options
        .iter()
        .filter(|o| o.starts_with(&partial))
        .map(|o| o.to_string())
        .collect()
}

/// Warp points with native tab completion of their names.
struct Warp {
    points: Vec<&'static str>,
}

impl CommandHandler for Warp {
    fn invoke(&self, args: &CommandArgs<'_>) -> HandlerResult {
        let Some(target) = args.arg(0) else {
            return Err(HandlerError::Usage);
        };
        let target = target.to_lowercase();
        if !self.points.contains(&target.as_str()) {
            args.sender().send_message(&format!("Unknown warp point '{target}'."));
            return Ok(());
        }
        args.sender().send_message(&format!("Warped to {target}."));
        Ok(())
    }

    fn tab_complete(&self, args: &CommandArgs<'_>) -> Option<HandlerResult<Vec<String>>> {
        if !args.is_empty() {
            return Some(Ok(Vec::new()));
        }
        Some(Ok(matching(&self.points, args)))
    }
}

/// Build the demo registration list.
pub fn registrations() -> Vec<Registration> {
    let flying = Rc::new(Cell::new(false));

    let toggle = Rc::clone(&flying);
    let fly_on = Rc::clone(&flying);
    let fly_off = Rc::clone(&flying);

    vec![
        Registration::command(
            CommandSpec::new("greet").description("Say hello"),
            |args: &CommandArgs<'_>| -> HandlerResult {
                let name = if args.is_empty() {
                    "world".to_string()
                } else {
                    args.args().join(" ")
                };
                args.sender().send_message(&format!("Hello, {name}!"));
                Ok(())
            },
        ),
        Registration::command(
            CommandSpec::new("fly")
                .alias("f")
                .permission(FLY_PERMISSION)
                .description("Toggle flight")
                .usage("/<command> [on|off]"),
            move |args: &CommandArgs<'_>| -> HandlerResult {
                if !args.is_empty() {
                    return Err(HandlerError::Usage);
                }
                toggle.set(!toggle.get());
                let state = if toggle.get() { "enabled" } else { "disabled" };
                args.sender().send_message(&format!("Flight {state}."));
                Ok(())
            },
        ),
        Registration::command(
            CommandSpec::new("fly.on")
                .alias("f.on")
                .permission(FLY_PERMISSION)
                .description("Start flying"),
            move |args: &CommandArgs<'_>| -> HandlerResult {
                fly_on.set(true);
                args.sender().send_message("Flight enabled.");
                Ok(())
            },
        ),
        Registration::command(
            CommandSpec::new("fly.off")
                .alias("f.off")
                .permission(FLY_PERMISSION)
                .description("Stop flying"),
            move |args: &CommandArgs<'_>| -> HandlerResult {
                fly_off.set(false);
                args.sender().send_message("Flight disabled.");
                Ok(())
            },
        ),
        Registration::completer(
            CompleterSpec::new("fly").alias("f"),
            |args: &CommandArgs<'_>| -> HandlerResult<Option<Vec<String>>> {
                if !args.is_empty() {
                    return Ok(Some(Vec::new()));
                }
                Ok(Some(matching(&["on", "off"], args)))
            },
        ),
        Registration::command(
            CommandSpec::new("build")
                .description("Building tools")
                .usage("Usage: /<command> wall <width> <height>"),
            |_: &CommandArgs<'_>| -> HandlerResult { Err(HandlerError::Usage) },
        ),
        Registration::command(
            CommandSpec::new("build.wall").description("Build a wall"),
            |args: &CommandArgs<'_>| -> HandlerResult {
                let [width, height] = args.args() else {
                    return Err(HandlerError::Usage);
                };
                let width: u32 = width.parse()?;
                let height: u32 = height.parse()?;
                args.sender()
                    .send_message(&format!("Built a {width}x{height} wall."));
                Ok(())
            },
        ),
        // Sizes are free-form numbers: nothing useful to suggest.
        Registration::completer(
            CompleterSpec::new("build.wall"),
            |_: &CommandArgs<'_>| -> HandlerResult<Option<Vec<String>>> { Ok(Some(Vec::new())) },
        ),
        Registration::command(
            CommandSpec::new("warp")
                .description("Teleport to a warp point")
                .usage("/<command> <point>"),
            Warp {
                points: vec!["arena", "shop", "spawn"],
            },
        ),
    ]
}
