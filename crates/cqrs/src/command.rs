/// An intent to mutate state (command abstraction).
///
/// Commands are executed once and produce no value. A command that cannot be
/// carried out reports why through its associated `Error`; nothing is
/// returned on success.
///
/// ## Command vs Query
///
/// - **Command**: "Add 5 units to item X" (mutates, returns `()`)
/// - **Query**: "How many units does item X have?" (reads, returns data)
///
/// ## Dependencies
///
/// A command owns (or shares via `Arc`) everything it needs to run, including
/// the store it writes to. There is no process-wide state; the caller injects
/// the collection when building the command.
pub trait Command {
    type Error: core::fmt::Debug;

    /// Carry out the intent.
    fn execute(&self) -> Result<(), Self::Error>;

    /// Stable name used in logs.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<C> Command for Box<C>
where
    C: Command + ?Sized,
{
    type Error = C::Error;

    fn execute(&self) -> Result<(), Self::Error> {
        (**self).execute()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
