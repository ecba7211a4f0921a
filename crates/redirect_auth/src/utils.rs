/// Runs `f` only when `predicate` holds; used to express validation guards.
pub fn when<W, F>(predicate: bool, f: F) -> Result<(), W>
where
    F: FnOnce() -> Result<(), W>,
{
    if predicate {
        f()
    } else {
        Ok(())
    }
}
