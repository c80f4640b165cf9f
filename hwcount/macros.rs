//! Declarative macros shared across the hwcount crate

/// Define a counter event enum with `name()`, `config()` and `all()`
///
/// Variant order is significant: it becomes the order of `ALL`, which the
/// batch types use for their slots.
///
/// # Example
/// ```
/// use hwcount::event_enum;
///
/// event_enum! {
///     pub enum CycleEvent {
///         Cycles => ("cycles", 0),
///         BusCycles => ("bus_cycles", 6),
///     }
/// }
///
/// let event = CycleEvent::BusCycles;
/// assert_eq!(event.name(), "bus_cycles");
/// assert_eq!(event.config(), 6);
/// assert_eq!(CycleEvent::all().len(), 2);
/// ```
///
/// Expands to:
/// - An enum with Debug, Clone, Copy, PartialEq, Eq, Hash derives
/// - `name(&self) -> &'static str` and `config(&self) -> u64` methods
/// - An `ALL` constant slice and an `all() -> Vec<Self>` method
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($str:literal, $config:expr)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)*
                }
            }

            pub fn config(&self) -> u64 {
                match self {
                    $($name::$variant => $config,)*
                }
            }

            pub fn all() -> Vec<$name> {
                Self::ALL.to_vec()
            }
        }
    };
}
