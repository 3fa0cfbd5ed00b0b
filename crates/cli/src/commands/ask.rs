use crate::commands::{load_engine, CommandResult};

pub fn run(message: &str) -> CommandResult {
    let engine = match load_engine("ask") {
        Ok(engine) => engine,
        Err(failure) => return failure,
    };

    CommandResult::success("ask", engine.respond(message).text)
}
