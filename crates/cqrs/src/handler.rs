use crate::{Command, Query};

/// Uniform dispatch point for commands.
///
/// The handler invokes `execute()` and hands back whatever it returned. It does
/// not validate, retry, or translate errors; a failing command's error reaches
/// the caller unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle<C>(&self, command: &C) -> Result<(), C::Error>
    where
        C: Command + ?Sized,
    {
        let name = command.name();
        tracing::debug!(command = name, "dispatching command");

        let result = command.execute();
        if let Err(err) = &result {
            tracing::warn!(command = name, error = ?err, "command failed");
        }
        result
    }
}

/// Uniform dispatch point for queries, generic over the result type.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryHandler;

impl QueryHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle<Q>(&self, query: &Q) -> Result<Q::Output, Q::Error>
    where
        Q: Query + ?Sized,
    {
        let name = query.name();
        tracing::debug!(query = name, "dispatching query");

        let result = query.execute();
        if let Err(err) = &result {
            tracing::warn!(query = name, error = ?err, "query failed");
        }
        result
    }
}
