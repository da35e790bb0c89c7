pub fn warbuoy_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use warbuoy_utils::Apply;
    /// fn join_optional(base: String, suffix: Option<&str>) -> String {
    ///     base.apply_map(suffix, |slf, suffix| slf + suffix)
    /// }
    /// assert_eq!(join_optional("lead".into(), None), "lead");
    /// assert_eq!(join_optional("lead".into(), Some("s")), "leads");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }
}

impl<T> Apply for T {}

/// Panics unless `$expr` matches `$pat` (and the optional guard holds).
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => {}
            ref other => ::core::panic!(
                "expected `{}`, got {:?}",
                ::core::stringify!($pat $(if $guard)?),
                other
            ),
        }
    };
}
