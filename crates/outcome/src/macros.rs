/// Capture a [`SourceLocation`](crate::SourceLocation) for the current
/// file, line, and enclosing function.
///
/// The function name is recovered through `core::any::type_name` on a local
/// item, so inside a closure it carries a `{{closure}}` segment — accurate,
/// if ugly.
///
/// ```
/// fn open_config() -> outcome::SourceLocation {
///     outcome::site!()
/// }
///
/// let loc = open_config();
/// assert!(loc.function().ends_with("open_config"));
/// ```
#[macro_export]
macro_rules! site {
    () => {{
        fn __site() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let __full = __name_of(__site);
        let __func = match __full.strip_suffix("::__site") {
            ::core::option::Option::Some(name) => name,
            ::core::option::Option::None => __full,
        };
        $crate::SourceLocation::new(::core::file!(), ::core::line!(), __func)
    }};
}

/// Build an [`Error`](crate::Error) with the call site attached.
///
/// Accepts either a single message expression or a format string with
/// arguments:
///
/// ```
/// use outcome::err_at;
///
/// let plain = err_at!("disk full");
/// assert_eq!(plain.msg(), "disk full");
///
/// let formatted = err_at!("disk full on {}", "/var");
/// assert_eq!(formatted.msg(), "disk full on /var");
/// assert!(formatted.info().starts_with("Error: disk full on /var\nFunction: "));
/// ```
#[macro_export]
macro_rules! err_at {
    ($msg:expr $(,)?) => {
        $crate::Error::with_location($msg, $crate::site!())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::with_location(::std::format!($fmt, $($arg)*), $crate::site!())
    };
}

/// Early-return an Err [`Outcome`](crate::Outcome) carrying an
/// [`err_at!`](crate::err_at) error.
///
/// ```
/// use outcome::{fail, Fallible, Outcome};
///
/// fn parse(raw: &str) -> Fallible<u32> {
///     if raw.is_empty() {
///         fail!("empty input");
///     }
///     Outcome::Ok(raw.len() as u32)
/// }
///
/// assert!(parse("").is_err());
/// assert_eq!(parse("ab").ok(), Some(2));
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        return $crate::Outcome::Err($crate::err_at!($($arg)*))
    };
}

/// Early-return via [`fail!`](crate::fail) when a condition does not hold.
///
/// ```
/// use outcome::{ensure, Fallible, Outcome};
///
/// fn checked_div(a: u32, b: u32) -> Fallible<u32> {
///     ensure!(b != 0, "division by zero: {}/{}", a, b);
///     Outcome::Ok(a / b)
/// }
///
/// assert_eq!(checked_div(10, 2).ok(), Some(5));
/// assert!(checked_div(1, 0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::fail!($($arg)*);
        }
    };
}
