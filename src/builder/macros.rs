//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from literal tables.
///
/// Each state lists its `event => destination` pairs. Destinations are added as
/// states automatically, so terminal states need no entry of their own.
///
/// # Example
///
/// ```
/// use statetrail::machine_config;
///
/// let config = machine_config! {
///     initial: "normal",
///     states: {
///         "normal" => { "click" => "busy" },
///         "busy" => { "done" => "normal", "crash" => "broken" },
///         "idle" => {},
///     }
/// };
///
/// assert_eq!(config.destination("busy", "crash"), Some("broken"));
/// assert!(config.contains_state("idle"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $to:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let config = $crate::core::MachineConfig::new($initial);
        $(
            let config = $crate::machine_config!(
                @transitions config.with_state($state), $state, { $( $event => $to ),* }
            );
        )*
        config
    }};

    (@transitions $config:expr, $from:expr, { $( $event:expr => $to:expr ),* }) => {
        $config $( .with_transition($from, $event, $to) )*
    };
}
