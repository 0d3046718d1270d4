/// Build-script helper: generate every binder unit for the linked schema.
///
/// Call from `build.rs` of the crate that `include!`s the output, with the
/// crate declaring the hosts listed under `[build-dependencies]` and named
/// in the script (`use my_screens as _;`) so its registrations are linked.
///
/// ```ignore
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     viewbind::build!();
///     Ok(())
/// }
/// ```
///
/// The consuming crate then includes `concat!(env!("OUT_DIR"), "/viewbind.rs")`.
#[macro_export]
macro_rules! build {
    () => {
        $crate::run()?;
    };
}
