//! Macros for ergonomic configuration.

/// Declare a [`MachineConfig`](crate::core::MachineConfig) inline.
///
/// Expands to [`ConfigBuilder`](crate::builder::ConfigBuilder) calls and
/// evaluates to `Result<MachineConfig, ConfigurationError>`. States keep the
/// order they are written in; a state with `{}` has no transitions.
///
/// # Example
///
/// ```
/// use stepwise::{machine_config, StateMachine};
///
/// let config = machine_config! {
///     initial: "locked",
///     states: {
///         "locked" => { "coin" => "unlocked" },
///         "unlocked" => { "push" => "locked", "coin" => "unlocked" },
///         "broken" => {},
///     }
/// }
/// .unwrap();
///
/// let turnstile = StateMachine::new(config).unwrap();
/// assert_eq!(turnstile.list_states(None), vec!["locked", "unlocked", "broken"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::builder::ConfigBuilder::new().initial($initial);
        $(
            let builder = builder
                .terminal($state)
                $( .transition($state, $event, $target) )*;
        )*
        builder.config()
    }};
}

#[cfg(test)]
mod tests {
    use crate::machine::StateMachine;

    #[test]
    fn machine_config_macro_declares_states() {
        let config = machine_config! {
            initial: "green",
            states: {
                "green" => { "next" => "yellow" },
                "yellow" => { "next" => "red" },
                "red" => { "next" => "green", },
            }
        }
        .unwrap();

        assert_eq!(config.initial, "green");
        assert_eq!(
            config.states.names().collect::<Vec<_>>(),
            vec!["green", "yellow", "red"]
        );
        assert_eq!(config.states.get("red").unwrap().target("next"), Some("green"));
    }

    #[test]
    fn machine_config_supports_empty_states() {
        let config = machine_config! {
            initial: "only",
            states: {
                "only" => {},
            },
        }
        .unwrap();

        let machine = StateMachine::new(config).unwrap();
        assert!(machine.is_terminal());
    }

    #[test]
    fn machine_config_accepts_expressions() {
        let start = String::from("start");
        let config = machine_config! {
            initial: start.clone(),
            states: {
                start.clone() => { "go" => "end" },
                "end" => {}
            }
        };

        let mut machine = StateMachine::new(config.unwrap()).unwrap();
        machine.fire("go").unwrap();
        assert_eq!(machine.current_state(), "end");
    }
}
