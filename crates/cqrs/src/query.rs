/// An intent to read state (query abstraction).
///
/// Queries are generic over their result through the associated `Output`
/// type, so one handler can serve every query in the system.
pub trait Query {
    type Output;
    type Error: core::fmt::Debug;

    /// Run the read and return its result.
    fn execute(&self) -> Result<Self::Output, Self::Error>;

    /// Stable name used in logs.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
